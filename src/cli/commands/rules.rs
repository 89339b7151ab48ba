use crate::errors::AppResult;
use crate::models::recurrence::RecurrenceRule;
use crate::utils::table::Table;

/// Print every supported rule with the number of instances it creates.
pub fn handle() -> AppResult<()> {
    let mut table = Table::with_headers(&["Rule", "Meaning", "Instances"]);
    for rule in RecurrenceRule::ALL {
        table.add_row(vec![
            rule.key().to_string(),
            rule.label().to_string(),
            rule.instance_count().to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
