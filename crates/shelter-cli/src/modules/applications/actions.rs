use shelter_client::api::applications;
use shelter_core::{
    paginate, AdoptionApplicationRequest, ApplicantApplication, ApplicationFilter, PageResponse,
    SortState,
};

use crate::cli_args::*;
use crate::modules::system::http::{print_empty, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_application(
    args: ApplicationArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ApplicationCommand::List(args) => {
            let query = args.paging.into_query(applications::default_query());
            let page = applications::list_all(
                &ctx.client,
                &query,
                args.status,
                args.search.as_deref(),
            )
            .await?;
            print_json(&page)?;
        }
        ApplicationCommand::Get(args) => {
            let application = applications::get(&ctx.client, args.id).await?;
            print_json(&application)?;
        }
        ApplicationCommand::ForUser(args) => {
            let rows = applications::for_user(&ctx.client, args.user_id).await?;
            print_json(&filter_user_applications(&rows, &args))?;
        }
        ApplicationCommand::HasApplied(args) => {
            let applied =
                applications::has_applied(&ctx.client, args.user_id, args.animal_id).await?;
            println!("{applied}");
        }
        ApplicationCommand::Apply(args) => {
            let application = applications::create(&ctx.client, &application_request(args)).await?;
            print_json(&application)?;
        }
        ApplicationCommand::Update(args) => {
            let request = application_request(args.fields);
            let application = applications::update(&ctx.client, args.id, &request).await?;
            print_json(&application)?;
        }
        ApplicationCommand::Reject(args) => {
            let application = applications::reject(&ctx.client, args.id, args.reviewer).await?;
            print_json(&application)?;
        }
        ApplicationCommand::Delete(args) => {
            applications::delete(&ctx.client, args.id).await?;
            print_empty("Application deleted");
        }
    }
    Ok(())
}

pub(crate) fn filter_user_applications(
    rows: &[ApplicantApplication],
    args: &ApplicationForUserArgs,
) -> PageResponse<ApplicantApplication> {
    let filter = ApplicationFilter {
        search: args.search.clone().unwrap_or_default(),
        status: args.status,
        sort: SortState::new(args.sort, args.direction),
    };
    paginate(&filter.apply(rows), args.page, args.size)
}

fn application_request(args: ApplyArgs) -> AdoptionApplicationRequest {
    AdoptionApplicationRequest {
        user: args.user_id.into(),
        animal: args.animal_id.into(),
        description: args.description,
    }
}
