//! CLI handler for the `plan` subcommand

use crate::cli::{OutputFormat, PlanArgs};
use crate::config::Config;
use crate::output::{render_text, write_report, PlanReport};
use crate::planner::rules::LONG_RUN_FLOOR_SHARE;
use crate::planner::{allocate, Weekday};
use tracing::{info, warn};

pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(unit) = args.unit {
        config.unit = unit;
    }
    if args.no_notes {
        config.notes = false;
    }
    let request = args.volume.request(&config);
    config.weekly_total = request.weekly_total;
    config.max_long_run = request.max_long_run;
    config.max_midweek_run = request.max_midweek_run;

    config.validate()?;

    info!(
        "Planning {} {} (long run cap {}, midweek cap {})",
        request.weekly_total, config.unit, request.max_long_run, request.max_midweek_run
    );

    let plan = allocate(&request)?;
    if request.max_long_run < request.weekly_total * LONG_RUN_FLOOR_SHARE {
        warn!(
            "Long run cap {} is below 15% of the week; Sunday was raised to {}",
            request.max_long_run,
            plan.day(Weekday::Sunday).total
        );
    }

    let report = PlanReport::new(request, plan, &config.unit, config.notes);

    match args.format {
        OutputFormat::Text => print!(
            "{}",
            render_text(&report.plan, &report.stats, &report.notes, &report.unit)
        ),
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(report_dir) = args.report_dir {
        let path = write_report(&report_dir, &report)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
