use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use vlsm_planner::config::{Args, Config, OutputFormat};
use vlsm_planner::logging::init_logging;
use vlsm_planner::output::{print_cards, render_json, subnet_print};
use vlsm_planner::{plan, Plan};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config)?;
    log::info!("#Start main()");

    let config = Config::from_args(args);
    let plan = match plan(config.network_text(), config.hosts_text(), &config.options) {
        Ok(plan) => plan,
        Err(e) => {
            // the user sees the message once, on stderr
            log::debug!("plan() failed: {e:?}");
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print_plan(&config, &plan)?;
    Ok(ExitCode::SUCCESS)
}

fn print_plan(config: &Config, plan: &Plan) -> Result<(), Box<dyn Error>> {
    match config.format {
        OutputFormat::Cards => print_cards(plan, config.color),
        OutputFormat::Csv => subnet_print(plan),
        OutputFormat::Json => println!("{}", render_json(plan, &config.params)?),
    }
    if config.emit_query {
        println!("?{}", config.params.to_query_string());
    }
    Ok(())
}
