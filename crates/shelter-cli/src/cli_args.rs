use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::adoptions::args::*;
pub use crate::modules::animals::args::*;
pub use crate::modules::applications::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::dog_facts::args::*;
pub use crate::modules::medical_records::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::vaccinations::args::*;

#[derive(Parser)]
#[command(name = "shelter")]
#[command(about = "Animal shelter console")]
pub struct Cli {
    #[arg(long, env = "SHELTER_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "SHELTER_TOKEN", help = "Access token to use instead of the stored session")]
    pub token: Option<String>,
    #[arg(long, env = "SHELTER_CONTEXT")]
    pub context: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Config(ConfigArgs),
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout,
    Whoami,
    Animals(AnimalArgs),
    Applications(ApplicationArgs),
    Adoptions(AdoptionArgs),
    MedicalRecords(MedicalRecordArgs),
    Vaccinations(VaccinationArgs),
    #[command(about = "Print random dog facts")]
    DogFacts(DogFactArgs),
}
