use crate::ui::prompt::confirm;
use crate::cli::parser::{Commands, PetAction};
use crate::config::Config;
use crate::core::pets::{PetInput, PetLogic};
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pet { action } = cmd else {
        return Ok(());
    };
    let pool = open_db(&cfg.database)?;

    match action {
        PetAction::Add {
            name,
            species,
            breed,
            age,
            notes,
        } => {
            let pet = PetLogic::add(
                &pool.conn,
                &PetInput {
                    name: name.clone(),
                    species: species.clone(),
                    breed: breed.clone(),
                    age: age.clone(),
                    notes: notes.clone(),
                },
            )?;
            success(format!("Pet #{} '{}' ({}) added.", pet.id, pet.name, pet.species));
            audit_quiet(&pool.conn, "pet_add", &pet.name, &format!("Pet #{} added", pet.id));
        }
        PetAction::List => {
            let pets = PetLogic::list(&pool.conn)?;
            if pets.is_empty() {
                info("No pets registered.");
                return Ok(());
            }
            let mut table = Table::with_headers(&["ID", "Name", "Species", "Breed", "Age", "Notes"]);
            for p in &pets {
                table.add_row(vec![
                    p.id.to_string(),
                    p.name.clone(),
                    p.species.clone(),
                    colorize_optional(&p.breed),
                    colorize_optional(&p.age),
                    colorize_optional(&p.notes),
                ]);
            }
            print!("{}", table.render());
        }
        PetAction::Del { id, yes } => {
            let pet = PetLogic::ensure_exists(&pool.conn, *id)?;
            let prompt = format!(
                "Remove pet #{} '{}'? Its tasks are kept but lose their pet.",
                pet.id, pet.name
            );
            if !*yes && !confirm(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }

            let (pet, orphaned) = PetLogic::delete(&pool.conn, *id)?;
            success(format!("Pet #{} '{}' removed.", pet.id, pet.name));
            if orphaned > 0 {
                warning(format!(
                    "{} task(s) now show as 'Unknown pet #{}'.",
                    orphaned, pet.id
                ));
            }
            audit_quiet(
                &pool.conn,
                "pet_del",
                &pet.name,
                &format!("Pet #{} removed, {} tasks orphaned", pet.id, orphaned),
            );
        }
    }
    Ok(())
}
