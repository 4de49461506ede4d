use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct Login {
    #[validate(min_length = 1)]
    #[validate(max_length = 254)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}
