use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
pub struct SignUpStaffInput {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, message = "Name must be atleast 2 characters"))]
    pub name: String,

    #[validate(length(min = 8, message = "Password must be atleast 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    pub sub_role: Option<String>,

    pub max_approval_amount: Option<i64>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct LoginStaffInput {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be atleast 8 characters long"))]
    pub password: String,
}
