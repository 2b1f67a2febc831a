use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct DraftForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub slug: Option<String>,
    pub vw: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Deserialize, Default)]
pub struct BlogQuery {
    pub vw: Option<String>,
    pub contact: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct LoginQuery {
    pub error: Option<String>,
}
