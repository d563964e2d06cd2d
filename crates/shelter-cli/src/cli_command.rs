use crate::cli_args::*;
use crate::modules::adoptions::handle_adoption;
use crate::modules::animals::handle_animal;
use crate::modules::applications::handle_application;
use crate::modules::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use crate::modules::dog_facts::handle_dog_facts;
use crate::modules::medical_records::handle_medical_record;
use crate::modules::system::CommandContext;
use crate::modules::vaccinations::handle_vaccination;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::Logout => handle_logout(ctx).await?,
        Command::Whoami => handle_whoami(ctx).await?,
        Command::Animals(args) => handle_animal(args, ctx).await?,
        Command::Applications(args) => handle_application(args, ctx).await?,
        Command::Adoptions(args) => handle_adoption(args, ctx).await?,
        Command::MedicalRecords(args) => handle_medical_record(args, ctx).await?,
        Command::Vaccinations(args) => handle_vaccination(args, ctx).await?,
        Command::DogFacts(args) => handle_dog_facts(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
