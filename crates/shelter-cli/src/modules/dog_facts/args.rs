use clap::Args;
use shelter_core::DEFAULT_DOG_FACT_LIMIT;

#[derive(Args)]
pub struct DogFactArgs {
    #[arg(long, default_value_t = DEFAULT_DOG_FACT_LIMIT)]
    pub limit: u32,
}
