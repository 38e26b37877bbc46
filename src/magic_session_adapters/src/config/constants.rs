pub mod env {
    pub const ENV_PREFIX: &str = "MAGIC_SESSION";
    pub const ENV_SEPARATOR: &str = "__";
    pub const CONFIG_FILE: &str = "config/base";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod auth_server {
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod auth_server {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
