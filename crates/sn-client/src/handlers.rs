use crate::outcome::{Outcome, to_json};

use sn_client::{
    ClientContext, DashboardController, LoginController, Mount, Notice, RegisterController,
    Route, Transition, render,
};

use chrono::Utc;
use serde_json::json;
use sn_core::EntityId;

pub(crate) struct RegisterArgs {
    pub phone: String,
    pub full_name: String,
    pub password: String,
    pub position: Option<String>,
}

#[derive(Default)]
pub(crate) struct ProfileArgs {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<String>,
    pub bio: Option<String>,
}

pub(crate) async fn register(ctx: ClientContext, args: RegisterArgs) -> Outcome {
    let mut view = RegisterController::new(ctx.clone());
    view.form.phone = args.phone;
    view.form.full_name = args.full_name;
    view.form.password = args.password;
    if let Some(position) = args.position {
        view.form.position = position;
    }

    let transition = view.submit().await;
    entered(&ctx, transition, view.notice())
}

pub(crate) async fn login(ctx: ClientContext, phone: String, password: String) -> Outcome {
    let mut view = LoginController::new(ctx.clone());
    view.form.phone = phone;
    view.form.password = password;

    let transition = view.submit().await;
    entered(&ctx, transition, view.notice())
}

/// Shared tail of register and login: show who is now logged in.
fn entered(ctx: &ClientContext, transition: Transition, notice: Option<&Notice>) -> Outcome {
    if transition.destination() != Some(Route::Dashboard) {
        return Outcome::with_notice(notice, String::new(), json!(null));
    }

    match ctx.current_user() {
        Ok(Some(user)) => Outcome::with_notice(notice, render::profile(&user), to_json(&user)),
        Ok(None) => Outcome::redirect(Route::Register),
        Err(e) => Outcome::failure(e.user_message(), json!({ "error": e.user_message() })),
    }
}

pub(crate) fn whoami(ctx: &ClientContext) -> Outcome {
    match ctx.current_user() {
        Ok(Some(user)) => Outcome::success(render::profile(&user), to_json(&user)),
        Ok(None) => Outcome::redirect(Route::Register),
        Err(e) => Outcome::failure(e.user_message(), json!({ "error": e.user_message() })),
    }
}

async fn open(ctx: ClientContext) -> Result<DashboardController, Outcome> {
    match DashboardController::mount(ctx).await {
        Mount::Ready(dashboard) => Ok(*dashboard),
        Mount::Redirect(route) => Err(Outcome::redirect(route)),
    }
}

pub(crate) async fn logout(ctx: ClientContext) -> Outcome {
    let mut dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    match dashboard.logout().destination() {
        Some(route) => Outcome::success(
            "Logged out.".to_string(),
            json!({ "redirect": route.path() }),
        ),
        None => Outcome::with_notice(dashboard.notice(), String::new(), json!(null)),
    }
}

pub(crate) async fn feed(ctx: ClientContext) -> Outcome {
    let dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    Outcome::with_notice(
        dashboard.notice(),
        render::feed(dashboard.posts(), Utc::now()),
        to_json(dashboard.posts()),
    )
}

pub(crate) async fn messages(ctx: ClientContext) -> Outcome {
    let dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    Outcome::with_notice(
        dashboard.notice(),
        render::chat(dashboard.messages(), dashboard.user().id, Utc::now()),
        to_json(dashboard.messages()),
    )
}

pub(crate) async fn groups(ctx: ClientContext) -> Outcome {
    let dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    Outcome::with_notice(
        dashboard.notice(),
        render::groups(dashboard.groups()),
        to_json(dashboard.groups()),
    )
}

pub(crate) async fn notifications(ctx: ClientContext) -> Outcome {
    let dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    let text = format!(
        "{} unread\n{}",
        dashboard.unread_notifications(),
        render::notifications(dashboard.notifications(), Utc::now())
    );
    Outcome::with_notice(dashboard.notice(), text, to_json(dashboard.notifications()))
}

pub(crate) async fn friends(ctx: ClientContext) -> Outcome {
    let dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    Outcome::with_notice(
        dashboard.notice(),
        render::friends(dashboard.friends()),
        to_json(dashboard.friends()),
    )
}

pub(crate) async fn post(ctx: ClientContext, content: String) -> Outcome {
    let mut dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    let before = dashboard.posts().len();
    dashboard.drafts.post = content;
    dashboard.create_post().await;

    match dashboard.posts().first() {
        Some(post) if dashboard.posts().len() > before => Outcome::with_notice(
            dashboard.notice(),
            render::feed(std::slice::from_ref(post), Utc::now()),
            to_json(post),
        ),
        _ => unchanged(dashboard.notice(), "Nothing to publish."),
    }
}

pub(crate) async fn send(ctx: ClientContext, content: String, to: Option<EntityId>) -> Outcome {
    let mut dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    let before = dashboard.messages().len();
    dashboard.drafts.message = content;
    dashboard.drafts.message_to = to;
    dashboard.send_message().await;

    match dashboard.messages().last() {
        Some(message) if dashboard.messages().len() > before => Outcome::with_notice(
            dashboard.notice(),
            render::chat(
                std::slice::from_ref(message),
                dashboard.user().id,
                Utc::now(),
            ),
            to_json(message),
        ),
        _ => unchanged(dashboard.notice(), "Nothing to send."),
    }
}

pub(crate) async fn create_group(
    ctx: ClientContext,
    name: String,
    description: Option<String>,
) -> Outcome {
    let mut dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    let before = dashboard.groups().len();
    dashboard.drafts.group_name = name;
    dashboard.drafts.group_description = description.unwrap_or_default();
    dashboard.create_group().await;

    match dashboard.groups().last() {
        Some(group) if dashboard.groups().len() > before => Outcome::with_notice(
            dashboard.notice(),
            render::groups(std::slice::from_ref(group)),
            to_json(group),
        ),
        _ => unchanged(dashboard.notice(), "Nothing to create."),
    }
}

pub(crate) async fn update_profile(ctx: ClientContext, args: ProfileArgs) -> Outcome {
    let mut dashboard = match open(ctx).await {
        Ok(d) => d,
        Err(outcome) => return outcome,
    };

    let form = &mut dashboard.profile_form;
    if let Some(full_name) = args.full_name {
        form.full_name = full_name;
    }
    if let Some(position) = args.position {
        form.position = position;
    }
    if let Some(email) = args.email {
        form.email = email;
    }
    if let Some(birth_date) = args.birth_date {
        form.birth_date = birth_date;
    }
    if let Some(bio) = args.bio {
        form.bio = bio;
    }

    dashboard.update_profile().await;

    Outcome::with_notice(
        dashboard.notice(),
        render::profile(dashboard.user()),
        to_json(dashboard.user()),
    )
}

/// A blank draft changes nothing; an error notice from the attempt still fails.
fn unchanged(notice: Option<&Notice>, text: &str) -> Outcome {
    match notice {
        Some(n) if n.is_error() => Outcome::with_notice(notice, String::new(), json!(null)),
        _ => Outcome::success(text.to_string(), json!(null)),
    }
}
