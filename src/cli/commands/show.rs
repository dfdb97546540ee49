use crate::config::Config;
use crate::core::TimeLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::formatting::{bold, flag, time_or_dash};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

/// Handle the `show` subcommand: render the full week.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.store)?;
    let mut ledger = TimeLedger::open(pool);
    let report = ledger.recalc();

    info(format!(
        "Weekly target: {} ({} h)",
        bold(&format_minutes(report.target_minutes)),
        ledger.target_hours
    ));
    println!();

    let mut table = Table::new(vec![
        Column::new("Day", 10),
        Column::new("In", 6),
        Column::new("Out", 6),
        Column::new("Lunch", 5),
        Column::new("Dinner", 6),
        Column::new("Total", 7),
        Column::new("Remaining", 9),
    ]);

    for line in &report.days {
        let entry = ledger.entry(line.day);
        table.add_row(vec![
            line.day.label().to_string(),
            time_or_dash(&entry.start),
            time_or_dash(&entry.end),
            flag(entry.lunch).to_string(),
            flag(entry.dinner).to_string(),
            line.total.clone(),
            line.remaining.clone(),
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));

    let balance = report.final_balance();
    println!(
        "Worked {} of {}, balance {}{}{}",
        bold(&format_minutes(report.total_worked())),
        format_minutes(report.target_minutes),
        color_for_balance(balance),
        format_minutes(balance),
        RESET
    );

    Ok(())
}
