use structopt::StructOpt;
use wallsim::prelude::*;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "wallsim",
    about = "Simulates the temperatures and stresses of a prestressed composite wall during a LOCA"
)]
struct Options {
    /// JSON file with the wall and time parameters
    parameters: String,

    /// JSON file with the internal gas temperature table
    gas_temperature: String,

    /// JSON file with the internal gas pressure table
    gas_pressure: String,

    /// JSON file with the configuration options
    #[structopt(long)]
    config: Option<String>,

    /// Directory of the output files
    #[structopt(long, default_value = "/tmp/wallsim/results")]
    out_dir: String,

    /// Prints the Newton-Raphson iterations
    #[structopt(long)]
    iterations: bool,

    /// Prints nothing but the final message
    #[structopt(short, long)]
    quiet: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let params = Parameters::read_json(&options.parameters)?;
    if let Some(msg) = params.validate() {
        println!("ERROR: {}", msg);
        return Err("invalid parameters");
    }
    let config = match &options.config {
        Some(path) => Config::read_json(path)?,
        None => Config::new(),
    };
    if let Some(msg) = config.validate() {
        println!("ERROR: {}", msg);
        return Err("invalid configuration");
    }
    let gas_temperature = Table::read_json(&options.gas_temperature)?;
    let gas_pressure = Table::read_json(&options.gas_pressure)?;
    let loads = Loads::new(&params.structure, gas_temperature, gas_pressure, params.time.duration)?;

    // run
    let sim = Simulation::new(params.structure, &params.time, loads, config)?;
    let (results, summary) = if options.quiet {
        sim.run(&mut ProgressSilent)?
    } else {
        let mut progress = ProgressConsole::new();
        progress.verbose_iterations = options.iterations;
        sim.run(&mut progress)?
    };

    // save results
    let path_results = format!("{}/results.json", options.out_dir);
    let path_summary = format!("{}/summary.json", options.out_dir);
    results.write_json(&path_results)?;
    summary.write_json(&path_summary)?;

    // message
    let thin_line = format!("{:─^1$}", "", path_results.len());
    println!("\n\n{}", thin_line);
    println!("Results saved to:");
    println!("{}", path_results);
    println!("{}", path_summary);
    println!("{}\n\n", thin_line);
    Ok(())
}
