#[macro_export]
macro_rules! client {
    ($x:expr) => {{
        Client::builder()
            .user_agent($x)
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap()
    }};
}
