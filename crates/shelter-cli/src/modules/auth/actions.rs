use shelter_client::api::auth;
use shelter_core::{LoginRequest, RegisterRequest};
use tracing::info;

use crate::cli_args::{LoginArgs, RegisterArgs};
use crate::modules::system::http::{print_empty, print_json};
use crate::modules::system::CommandContext;
use crate::{prompt_line, prompt_password};

pub(crate) async fn handle_login(args: LoginArgs, ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    login_with_password(ctx, email, password).await
}

pub(crate) async fn login_with_password(
    ctx: &mut CommandContext<'_>,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    auth::login(&ctx.client, &LoginRequest { email, password }).await?;
    let user = auth::me(&ctx.client).await?;
    info!(context = %ctx.context_name, user_id = user.id, "login complete");

    let name = user.display_name();
    let role = user.role;
    ctx.context_entry().user = Some(user);
    if ctx.config.current_context.is_none() {
        ctx.config.current_context = Some(ctx.context_name.clone());
    }
    println!("Logged in as {name} ({})", role.as_str());
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let request = RegisterRequest {
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        password,
    };
    let user = auth::register(&ctx.client, &request).await?;
    print_json(&user)
}

pub(crate) async fn handle_logout(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let result = auth::logout(&ctx.client).await;
    if let Some(context) = ctx.config.contexts.get_mut(&ctx.context_name) {
        context.user = None;
        context.access_expires_at = None;
    }
    result?;
    print_empty("Logged out");
    Ok(())
}

pub(crate) async fn handle_whoami(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let user = auth::me(&ctx.client).await?;
    print_json(&user)?;
    ctx.context_entry().user = Some(user);
    Ok(())
}
