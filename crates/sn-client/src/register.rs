use crate::{Action, ClientContext, ClientError, ClientResult, Notice, Route, Transition};

use log::{info, warn};
use sn_core::validation::validate_registration;
use sn_core::{DEFAULT_POSITION, User};
use sn_gateway::{AuthApi, RegisterRequest};

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub phone: String,
    pub full_name: String,
    pub position: String,
    pub password: String,
    pub show_password: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            phone: String::new(),
            full_name: String::new(),
            position: DEFAULT_POSITION.to_string(),
            password: String::new(),
            show_password: false,
        }
    }
}

impl RegisterForm {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            phone: self.phone.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            position: self.position.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

pub struct RegisterController {
    ctx: ClientContext,
    pub form: RegisterForm,
    notice: Option<Notice>,
}

impl RegisterController {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            form: RegisterForm::default(),
            notice: None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.show_password = !self.form.show_password;
    }

    pub fn go_to_login(&self) -> Transition {
        Transition::Navigate(Route::Login)
    }

    pub async fn submit(&mut self) -> Transition {
        match self.register().await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                self.notice = Some(Notice::success("Registration successful!"));
                Transition::Navigate(Route::Dashboard)
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                self.notice = Some(Notice::error(e.user_message()));
                Transition::Stay
            }
        }
    }

    async fn register(&self) -> ClientResult<User> {
        validate_registration(&self.form.phone, &self.form.full_name, &self.form.password)?;

        let user = self
            .ctx
            .gateway
            .register(&self.form.to_request())
            .await
            .map_err(|e| ClientError::gateway(Action::Register, e))?;

        self.ctx.session.save(&user)?;
        Ok(user)
    }
}
