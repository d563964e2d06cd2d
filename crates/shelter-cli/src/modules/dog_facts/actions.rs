use shelter_client::api::dog_facts;

use crate::cli_args::DogFactArgs;
use crate::modules::system::http::print_json;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_dog_facts(
    args: DogFactArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let facts = dog_facts::list(&ctx.client, args.limit).await?;
    print_json(&facts)?;
    Ok(())
}
