use serde::{Deserialize, Serialize};

pub mod get_status {
    use super::*;

    /// Liveness of the service
    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}
