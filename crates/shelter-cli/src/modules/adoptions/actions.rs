use shelter_client::api::adoptions;

use crate::cli_args::*;
use crate::modules::system::http::print_json;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_adoption(
    args: AdoptionArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AdoptionCommand::List(args) => {
            let query = args.paging.into_query(adoptions::default_query());
            let page = adoptions::list(&ctx.client, &query).await?;
            print_json(&page)?;
        }
        AdoptionCommand::Get(args) => {
            let adoption = adoptions::get(&ctx.client, args.id).await?;
            print_json(&adoption)?;
        }
    }
    Ok(())
}
