use crate::Envelope;
use serde::{Deserialize, Serialize};

pub mod login {
    use super::*;

    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct RequestBody {
        pub mail: String,
        pub password: String,
    }

    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct LoginDTO {
        pub mail: String,
        pub token: String,
        /// Unix timestamp in seconds
        #[serde(rename = "expiresAt")]
        pub expires_at: i64,
    }

    pub type APIResponse = Envelope<LoginDTO>;
}
