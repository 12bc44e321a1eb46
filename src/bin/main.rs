use clap::Parser;
use env_logger::Env;
use exact_riemann::{
    output::{profile_file_name, reference_file_name, write_profile, write_reference_profile},
    ConfigError, ExactRiemannSolver, Grid, RiemannError, RunConfig, ShockTube,
};
use log::{error, info};
use std::{
    error::Error,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[clap(about = "Exact solutions of Euler shock tube problems")]
pub struct Cli {
    /// Problem to solve: a catalog name, `all` or `user` (repeatable)
    #[clap(short = 'p', long = "problem", value_name = "NAME")]
    problems: Vec<String>,

    /// YAML file with the run configuration
    #[clap(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Adiabatic index of the ideal gas [default: 1.4]
    #[clap(short, long)]
    gamma: Option<f64>,

    /// Discretization: zonal or nodal [default: zonal]
    #[clap(short, long)]
    disc: Option<String>,

    /// Number of evaluation points [default: 400]
    #[clap(short, long)]
    npts: Option<usize>,

    /// Domain boundaries [default: 0 1]
    #[clap(short, long, number_of_values = 2, allow_hyphen_values = true, value_names = &["X_MIN", "X_MAX"])]
    bounds: Option<Vec<f64>>,

    /// User problem left state
    #[clap(short, long, number_of_values = 3, allow_hyphen_values = true, value_names = &["DENS", "VEL", "PRES"])]
    left: Option<Vec<f64>>,

    /// User problem right state
    #[clap(short, long, number_of_values = 3, allow_hyphen_values = true, value_names = &["DENS", "VEL", "PRES"])]
    right: Option<Vec<f64>>,

    /// User problem diaphragm location
    #[clap(short = 'x', long, allow_hyphen_values = true)]
    x0: Option<f64>,

    /// User problem evaluation time
    #[clap(short, long)]
    time: Option<f64>,

    /// User problem name
    #[clap(long)]
    name: Option<String>,

    /// Output directory
    #[clap(short, long, parse(from_os_str), default_value = "output")]
    output: PathBuf,

    /// Also write the initial two-state reference profile
    #[clap(long)]
    reference: bool,

    /// Initial pressure guess: adaptive, pvrs, trrs or tsrs
    #[clap(long)]
    guess: Option<String>,

    /// Relative tolerance of the pressure iteration
    #[clap(long)]
    tolerance: Option<f64>,

    /// Iteration budget of the pressure iteration
    #[clap(long)]
    max_iterations: Option<usize>,
}

impl Cli {
    fn user_problem(&self) -> Result<ShockTube, ConfigError> {
        let missing = |name: &str| ConfigError::MissingParameter(format!("user problem: {name}"));
        let left = self.left.as_ref().ok_or_else(|| missing("left"))?;
        let right = self.right.as_ref().ok_or_else(|| missing("right"))?;
        let x0 = self.x0.ok_or_else(|| missing("x0"))?;
        let time = self.time.ok_or_else(|| missing("time"))?;
        let name = self.name.as_ref().ok_or_else(|| missing("name"))?;
        Ok(ShockTube::new(
            name,
            [left[0], left[1], left[2]].into(),
            [right[0], right[1], right[2]].into(),
            time,
            x0,
        ))
    }

    /// Apply the command line on top of the (file) configuration.
    fn configure(&self, mut config: RunConfig) -> Result<RunConfig, ConfigError> {
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(disc) = &self.disc {
            config.discretization = disc.parse()?;
        }
        if let Some(npts) = self.npts {
            config.num_points = npts;
        }
        if let Some(bounds) = &self.bounds {
            config.bounds = (bounds[0], bounds[1]);
        }
        if let Some(guess) = &self.guess {
            config.solver.guess = guess.parse()?;
        }
        if let Some(tolerance) = self.tolerance {
            config.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.solver.max_iterations = max_iterations;
        }

        for name in self.problems.iter() {
            match name.as_str() {
                "all" => config.problems.extend(ShockTube::presets()),
                "user" => config.problems.push(self.user_problem()?),
                _ => config.problems.push(
                    ShockTube::preset(name).ok_or(ConfigError::UnknownProblem(name.clone()))?,
                ),
            }
        }
        if config.problems.is_empty() {
            return Err(ConfigError::MissingParameter("problem".to_string()));
        }
        Ok(config)
    }
}

fn run_problem(
    tube: &ShockTube,
    config: &RunConfig,
    solver: &ExactRiemannSolver,
    grid: &Grid,
    output: &Path,
    reference: bool,
) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = grid.bounds();
    info!("Running problem: {}", tube.name);
    info!("  xbnds: {} {}", x_min, x_max);
    info!("  x0: {}", tube.x0);
    info!("  grid:  {} ({})", grid.discretization(), grid.len());
    info!(
        "  left:  {}  {}  {}",
        tube.left.density(),
        tube.left.velocity(),
        tube.left.pressure()
    );
    info!(
        "  right: {}  {}  {}",
        tube.right.density(),
        tube.right.velocity(),
        tube.right.pressure()
    );
    info!("  gamma: {}", config.gamma);
    info!("  time:  {}", tube.time);

    // Solve for the star region, then sample the speed grid (x - x0) / t
    let problem = tube.riemann_problem(config.gamma)?;
    let solution = solver.solve(&problem)?;
    if solution.is_vacuum() {
        info!("  initial states generate a vacuum");
    }
    let samples = solution.sample_all(&grid.similarity_coordinates(tube.x0, tube.time));

    let filename = output.join(profile_file_name(tube));
    info!("  Writing to file: {}", filename.display());
    let mut writer = BufWriter::new(File::create(&filename)?);
    write_profile(&mut writer, tube, grid, problem.gamma(), &samples)?;

    if reference {
        let filename = output.join(reference_file_name(tube));
        info!("  Writing reference profile to file: {}", filename.display());
        let mut writer = BufWriter::new(File::create(&filename)?);
        write_reference_profile(&mut writer, tube, grid, problem.gamma())?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // parse command line parameters
    let args = Cli::parse();

    // read configuration
    let config = match &args.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    let config = args.configure(config)?;

    let solver = config.solver.solver()?;
    let grid = Grid::new(config.discretization, config.bounds, config.num_points)?;
    fs::create_dir_all(&args.output)?;

    let mut failures = 0;
    for tube in config.problems.iter() {
        if let Err(err) = run_problem(tube, &config, &solver, &grid, &args.output, args.reference) {
            // Solver failures only abandon the problem at hand
            match err.downcast_ref::<RiemannError>() {
                Some(_) => {
                    error!("[FAILURE] Unable to solve problem {}: {}", tube.name, err);
                    failures += 1;
                }
                None => return Err(err),
            }
        }
    }

    if failures > 0 {
        error!("{} of {} problems failed", failures, config.problems.len());
    }
    println!("Done!");
    Ok(())
}
