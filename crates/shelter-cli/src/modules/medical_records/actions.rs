use shelter_client::api::medical_records::{self, RecordFilters};
use shelter_core::{MedicalRecord, MedicalRecordFilter, MedicalRecordRequest, SortState};

use crate::cli_args::*;
use crate::modules::system::http::{print_empty, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_medical_record(
    args: MedicalRecordArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        MedicalRecordCommand::List(args) => {
            if let (Some(from), Some(to)) = (args.from, args.to) {
                if from > to {
                    anyhow::bail!("--from must not be after --to");
                }
            }
            let query = args.paging.into_query(medical_records::default_query());
            let filters = RecordFilters {
                animal_status: args.animal_status,
                start_date: args.from,
                end_date: args.to,
                search: args.search,
            };
            let page = medical_records::list(&ctx.client, &query, &filters).await?;
            print_json(&page)?;
        }
        MedicalRecordCommand::Get(args) => {
            let record = medical_records::get(&ctx.client, args.id).await?;
            print_json(&record)?;
        }
        MedicalRecordCommand::ForAnimal(args) => {
            let records = medical_records::for_animal(&ctx.client, args.animal_id).await?;
            print_json(&filter_animal_records(&records, &args))?;
        }
        MedicalRecordCommand::Create(args) => {
            let record = medical_records::create(&ctx.client, &record_request(args)).await?;
            print_json(&record)?;
        }
        MedicalRecordCommand::Update(args) => {
            let request = record_request(args.fields);
            let record = medical_records::update(&ctx.client, args.id, &request).await?;
            print_json(&record)?;
        }
        MedicalRecordCommand::Delete(args) => {
            medical_records::delete(&ctx.client, args.id).await?;
            print_empty("Medical record deleted");
        }
    }
    Ok(())
}

pub(crate) fn filter_animal_records(
    records: &[MedicalRecord],
    args: &MedicalRecordForAnimalArgs,
) -> Vec<MedicalRecord> {
    let filter = MedicalRecordFilter {
        search: args.search.clone().unwrap_or_default(),
        date_from: args.from,
        date_to: args.to,
        sort: SortState::new(args.sort, args.direction),
    };
    filter.apply(records)
}

fn record_request(fields: MedicalRecordFields) -> MedicalRecordRequest {
    MedicalRecordRequest {
        animal_id: fields.animal_id,
        veterinarian_id: fields.veterinarian_id,
        date: fields.date.format("%Y-%m-%d").to_string(),
        diagnosis: fields.diagnosis,
        treatment: fields.treatment,
        cost: fields.cost,
    }
}
