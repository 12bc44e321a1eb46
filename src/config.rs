use std::{fs, path::Path};

use yaml_rust::{Yaml, YamlLoader};

use crate::{
    errors::ConfigError,
    grid::Discretization,
    problems::ShockTube,
    riemann_solver::{ExactRiemannSolver, PressureGuess, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE},
};

pub const DEFAULT_GAMMA: f64 = 1.4;
pub const DEFAULT_NUM_POINTS: usize = 400;
pub const DEFAULT_BOUNDS: (f64, f64) = (0., 1.);

/// Accepts both reals and integers, yaml-rust only converts the former.
fn as_f64(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn parse_f64(yaml: &Yaml, name: &str) -> Result<Option<f64>, ConfigError> {
    if yaml.is_badvalue() {
        return Ok(None);
    }
    as_f64(yaml)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidValue(name.to_string(), format!("{:?}", yaml)))
}

fn parse_f64_array(yaml: &Yaml, name: &str, count: usize) -> Result<Vec<f64>, ConfigError> {
    match yaml.as_vec() {
        Some(arr) if arr.len() == count => arr
            .iter()
            .map(|y| as_f64(y).ok_or_else(|| ConfigError::InvalidArrayFormat(yaml.clone())))
            .collect(),
        Some(arr) => Err(ConfigError::InvalidArrayLength(count, arr.len())),
        None => Err(ConfigError::MissingParameter(name.to_string())),
    }
}

/// Settings of the pressure iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverCfg {
    pub guess: PressureGuess,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            guess: PressureGuess::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if yaml.is_badvalue() {
            return Ok(cfg);
        }
        if let Some(guess) = yaml["guess"].as_str() {
            cfg.guess = guess.parse()?;
        }
        if let Some(tolerance) = parse_f64(&yaml["tolerance"], "solver:tolerance")? {
            cfg.tolerance = tolerance;
        }
        if !yaml["max_iterations"].is_badvalue() {
            cfg.max_iterations = yaml["max_iterations"]
                .as_i64()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "solver:max_iterations".to_string(),
                        format!("{:?}", yaml["max_iterations"]),
                    )
                })? as usize;
        }
        Ok(cfg)
    }

    pub fn solver(&self) -> Result<ExactRiemannSolver, ConfigError> {
        ExactRiemannSolver::new(self.guess, self.tolerance, self.max_iterations)
            .map_err(|err| ConfigError::InvalidValue("solver".to_string(), err.to_string()))
    }
}

/// A problem entry: either only the name of a catalog problem, or a complete
/// user defined problem.
fn parse_problem(yaml: &Yaml) -> Result<ShockTube, ConfigError> {
    let name = yaml["name"]
        .as_str()
        .ok_or(ConfigError::MissingParameter("problems:name".to_string()))?;

    if yaml["left"].is_badvalue() && yaml["right"].is_badvalue() {
        return ShockTube::preset(name).ok_or(ConfigError::UnknownProblem(name.to_string()));
    }

    let left = parse_f64_array(&yaml["left"], "problems:left", 3)?;
    let right = parse_f64_array(&yaml["right"], "problems:right", 3)?;
    let x0 = parse_f64(&yaml["x0"], "problems:x0")?
        .ok_or(ConfigError::MissingParameter("problems:x0".to_string()))?;
    let time = parse_f64(&yaml["time"], "problems:time")?
        .ok_or(ConfigError::MissingParameter("problems:time".to_string()))?;
    Ok(ShockTube::new(
        name,
        [left[0], left[1], left[2]].into(),
        [right[0], right[1], right[2]].into(),
        time,
        x0,
    ))
}

/// Configuration of a run: the problems to solve and how to sample them.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub gamma: f64,
    pub discretization: Discretization,
    pub num_points: usize,
    pub bounds: (f64, f64),
    pub solver: SolverCfg,
    pub problems: Vec<ShockTube>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            discretization: Discretization::default(),
            num_points: DEFAULT_NUM_POINTS,
            bounds: DEFAULT_BOUNDS,
            solver: SolverCfg::default(),
            problems: vec![],
        }
    }
}

impl RunConfig {
    pub fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(gamma) = parse_f64(&yaml["gamma"], "gamma")? {
            cfg.gamma = gamma;
        }
        if let Some(discretization) = yaml["discretization"].as_str() {
            cfg.discretization = discretization.parse()?;
        }
        if !yaml["num_points"].is_badvalue() {
            cfg.num_points = yaml["num_points"]
                .as_i64()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "num_points".to_string(),
                        format!("{:?}", yaml["num_points"]),
                    )
                })? as usize;
        }
        if !yaml["bounds"].is_badvalue() {
            let bounds = parse_f64_array(&yaml["bounds"], "bounds", 2)?;
            cfg.bounds = (bounds[0], bounds[1]);
        }
        cfg.solver = SolverCfg::parse(&yaml["solver"])?;
        if let Some(problems) = yaml["problems"].as_vec() {
            cfg.problems = problems
                .iter()
                .map(parse_problem)
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(cfg)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let docs = YamlLoader::load_from_str(source).map_err(|e| ConfigError::Load(e.to_string()))?;
        match docs.first() {
            Some(doc) => Self::parse(doc),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::Load(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_yaml_str(&source)
    }
}
