use crate::{Action, ClientContext, ClientError, ClientResult, Notice, Route, Transition};

use log::{info, warn};
use sn_core::User;
use sn_core::validation::validate_login;
use sn_gateway::AuthApi;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
    pub show_password: bool,
}

pub struct LoginController {
    ctx: ClientContext,
    pub form: LoginForm,
    notice: Option<Notice>,
}

impl LoginController {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            form: LoginForm::default(),
            notice: None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.show_password = !self.form.show_password;
    }

    /// Link to the registration view.
    pub fn go_to_register(&self) -> Transition {
        Transition::Navigate(Route::Register)
    }

    pub async fn submit(&mut self) -> Transition {
        match self.authenticate().await {
            Ok(user) => {
                info!("User {} logged in", user.id);
                self.notice = Some(Notice::success("Welcome!"));
                Transition::Navigate(Route::Dashboard)
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.notice = Some(Notice::error(e.user_message()));
                Transition::Stay
            }
        }
    }

    async fn authenticate(&self) -> ClientResult<User> {
        validate_login(&self.form.phone, &self.form.password)?;

        let user = self
            .ctx
            .gateway
            .login(self.form.phone.trim(), &self.form.password)
            .await
            .map_err(|e| ClientError::gateway(Action::LogIn, e))?;

        self.ctx.session.save(&user)?;
        Ok(user)
    }
}
