use shelter_client::api::animals;
use shelter_core::{AnimalFilters, AnimalRequest};

use crate::cli_args::*;
use crate::modules::system::http::{print_empty, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_animal(
    args: AnimalArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AnimalCommand::List(args) => {
            let query = args.paging.into_query(animals::default_query());
            let filters = AnimalFilters {
                status: args.status,
                is_active: args.active,
                has_required_vaccinations: args.vaccinated,
                sex: args.sex,
                min_age: args.min_age,
                max_age: args.max_age,
                search: args.search,
            };
            let page = animals::list(&ctx.client, &query, &filters).await?;
            print_json(&page)?;
        }
        AnimalCommand::Get(args) => {
            let animal = animals::get(&ctx.client, args.id).await?;
            print_json(&animal)?;
        }
        AnimalCommand::Create(args) => {
            let animal = animals::create(&ctx.client, &animal_request(args.fields)).await?;
            print_json(&animal)?;
        }
        AnimalCommand::Update(args) => {
            let animal = animals::update(&ctx.client, args.id, &animal_request(args.fields)).await?;
            print_json(&animal)?;
        }
        AnimalCommand::Delete(args) => {
            animals::delete(&ctx.client, args.id).await?;
            print_empty("Animal deleted");
        }
    }
    Ok(())
}

fn animal_request(fields: AnimalFields) -> AnimalRequest {
    AnimalRequest {
        name: fields.name,
        species_id: fields.species_id,
        breed_id: fields.breed_id,
        sex: fields.sex,
        birth_date: fields.birth_date,
        intake_date: fields.intake_date,
        status: fields.status,
        price: fields.price,
        is_active: fields.active,
        image_url: fields.image_url,
    }
}
