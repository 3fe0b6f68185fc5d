//! CLI Commands

use anyhow::Context as _;
use cellars_domain::{ArmorClass, Creature, CreatureId, CreatureType, Speed, SpeedType};
use cellars_usecase::{challenge_rating, describe, CreateCreature};
use clap::{Args, Subcommand};

use crate::wiring::App;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a creature from raw stats
    Create(CreateArgs),
    /// Create a standard monstrosity (AC 10, 10 HP, walking 30 ft.)
    CreateStandard,
    /// Show a stored creature
    Show {
        /// Creature id
        id: String,
    },
    /// List stored creature ids
    List,
    /// Delete a stored creature
    Delete {
        /// Creature id
        id: String,
    },
    /// Print freshly generated ids
    Token {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Creature type (beast, dragon, fey, ...)
    #[arg(long = "type", value_name = "TYPE")]
    pub creature_type: CreatureType,

    #[arg(long, default_value_t = 0)]
    pub walk: i32,
    #[arg(long, default_value_t = 0)]
    pub fly: i32,
    #[arg(long, default_value_t = 0)]
    pub swim: i32,
    #[arg(long, default_value_t = 0)]
    pub burrow: i32,
    #[arg(long, default_value_t = 0)]
    pub climb: i32,

    /// Armor class base value
    #[arg(long)]
    pub ac_base: i32,
    #[arg(long, default_value_t = 0)]
    pub ac_bonus: i32,
    /// Armor description, e.g. "chain mail"
    #[arg(long)]
    pub ac_description: Option<String>,

    /// Maximum hit points
    #[arg(long)]
    pub hp: i32,
}

impl CreateArgs {
    fn into_command(self) -> CreateCreature {
        let armor_class = match self.ac_description {
            Some(description) => ArmorClass::with_description(self.ac_base, self.ac_bonus, description),
            None => ArmorClass::new(self.ac_base, self.ac_bonus),
        };
        CreateCreature::new(self.creature_type, armor_class, self.hp)
            .with_speed(SpeedType::Walking, Speed::new(self.walk))
            .with_speed(SpeedType::Flying, Speed::new(self.fly))
            .with_speed(SpeedType::Swimming, Speed::new(self.swim))
            .with_speed(SpeedType::Burrowing, Speed::new(self.burrow))
            .with_speed(SpeedType::Climbing, Speed::new(self.climb))
    }
}

impl Command {
    pub fn run(self, app: &App) -> anyhow::Result<()> {
        match self {
            Command::Create(args) => {
                let creature = app
                    .facade
                    .create(args.into_command())
                    .context("Failed to create creature")?;
                print_report(&creature);
            }
            Command::CreateStandard => {
                let creature = app
                    .facade
                    .create_standard()
                    .context("Failed to create standard creature")?;
                print_report(&creature);
            }
            Command::Show { id } => {
                let creature = app.facade.find(&CreatureId::new(id))?;
                print_report(&creature);
            }
            Command::List => {
                for creature in app.facade.list()? {
                    println!("{}", creature.id());
                }
            }
            Command::Delete { id } => {
                app.facade.delete(&CreatureId::new(id))?;
            }
            Command::Token { count } => {
                for _ in 0..count {
                    println!("{}", app.id_generator.generate());
                }
            }
        }
        Ok(())
    }
}

fn print_report(creature: &Creature) {
    println!("{}", describe(creature));
    println!("Challenge Rating: {:.2}", challenge_rating(creature));
}
