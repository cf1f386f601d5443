pub mod stubs;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "password_policy=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
