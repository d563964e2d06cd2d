use shelter_client::api::vaccinations;
use shelter_core::{
    SortDirection, SortState, VaccinationFilter, VaccinationRequest, VaccinationSortField,
    VaccinationTypeRequest,
};

use crate::cli_args::*;
use crate::modules::system::http::{print_empty, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_vaccination(
    args: VaccinationArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        VaccinationCommand::List(args) => {
            let query = args.paging.into_query(vaccinations::default_query());
            let mut page = vaccinations::list(
                &ctx.client,
                &query,
                args.animal_status,
                args.search.as_deref(),
            )
            .await?;
            if args.due_before.is_some() || args.sort.is_some() {
                let filter = VaccinationFilter {
                    search: String::new(),
                    due_before: args.due_before,
                    sort: match args.sort {
                        Some(field) => SortState::new(field, args.sort_direction),
                        None => SortState::new(
                            VaccinationSortField::DateAdministered,
                            SortDirection::Desc,
                        ),
                    },
                };
                page.content = filter.apply(&page.content);
            }
            print_json(&page)?;
        }
        VaccinationCommand::Get(args) => {
            let vaccination = vaccinations::get(&ctx.client, args.id).await?;
            print_json(&vaccination)?;
        }
        VaccinationCommand::Create(args) => {
            let vaccination =
                vaccinations::create(&ctx.client, &vaccination_request(args)).await?;
            print_json(&vaccination)?;
        }
        VaccinationCommand::Update(args) => {
            let request = vaccination_request(args.fields);
            let vaccination = vaccinations::update(&ctx.client, args.id, &request).await?;
            print_json(&vaccination)?;
        }
        VaccinationCommand::Delete(args) => {
            vaccinations::delete(&ctx.client, args.id).await?;
            print_empty("Vaccination deleted");
        }
        VaccinationCommand::Types(args) => handle_vaccination_type(args, ctx).await?,
    }
    Ok(())
}

async fn handle_vaccination_type(
    args: VaccinationTypeArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        VaccinationTypeCommand::List(args) => {
            let query = args.paging.into_query(vaccinations::default_type_query());
            let page = vaccinations::list_types(
                &ctx.client,
                &query,
                args.required,
                args.search.as_deref(),
            )
            .await?;
            print_json(&page)?;
        }
        VaccinationTypeCommand::Get(args) => {
            let vaccination_type = vaccinations::get_type(&ctx.client, args.id).await?;
            print_json(&vaccination_type)?;
        }
        VaccinationTypeCommand::Create(args) => {
            let vaccination_type =
                vaccinations::create_type(&ctx.client, &vaccination_type_request(args)).await?;
            print_json(&vaccination_type)?;
        }
        VaccinationTypeCommand::Update(args) => {
            let request = vaccination_type_request(args.fields);
            let vaccination_type = vaccinations::update_type(&ctx.client, args.id, &request).await?;
            print_json(&vaccination_type)?;
        }
        VaccinationTypeCommand::Delete(args) => {
            vaccinations::delete_type(&ctx.client, args.id).await?;
            print_empty("Vaccination type deleted");
        }
    }
    Ok(())
}

fn vaccination_type_request(args: VaccinationTypeCreateArgs) -> VaccinationTypeRequest {
    VaccinationTypeRequest {
        vaccine_name: args.name,
        description: args.description,
        duration_months: args.duration_months,
        required_for_adoption: i32::from(args.required),
    }
}

fn vaccination_request(fields: VaccinationFields) -> VaccinationRequest {
    VaccinationRequest {
        animal: fields.animal_id.into(),
        veterinarian: fields.veterinarian_id.into(),
        date_administered: fields.date.format("%Y-%m-%d").to_string(),
        vaccination_type: fields.type_id.into(),
        next_due_date: fields
            .next_due
            .map(|date| date.format("%Y-%m-%d").to_string()),
    }
}
