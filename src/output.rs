use std::io::{self, Write};

use crate::{
    gas_law::AdiabaticIndex,
    grid::Grid,
    physical_quantities::{Conserved, Primitive, State},
    problems::ShockTube,
    riemann_solver::SampleResult,
};

const COLUMNS: [&str; 8] = [
    "x",
    "dens [$\\rho$]",
    "mom [$\\mu$]",
    "e [$\\epsilon$]",
    "pres [$p$]",
    "eint",
    "velx [$v$]",
    "cspd",
];

/// Scientific notation with `precision` fractional digits and a signed exponent
/// of at least two digits, e.g. `1.64400e-01`, the way C's `%e` prints it.
pub fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.abs())
            }
            Err(_) => formatted,
        },
        // inf and NaN
        None => formatted,
    }
}

/// File name of the sampled profile of `tube`.
pub fn profile_file_name(tube: &ShockTube) -> String {
    format!("{}_t{}_exact.csv", tube.name, scientific(tube.time, 5))
}

/// File name of the initial (reference) profile of `tube`.
pub fn reference_file_name(tube: &ShockTube) -> String {
    format!("{}_reference.csv", tube.name)
}

fn write_header<W: Write>(
    writer: &mut W,
    tube: &ShockTube,
    grid: &Grid,
    gamma: &AdiabaticIndex,
) -> io::Result<()> {
    let (x_min, x_max) = grid.bounds();
    let state = |state: &State<Primitive>| {
        format!(
            "{}\t{}\t{}",
            scientific(state.density(), 5),
            scientific(state.velocity(), 5),
            scientific(state.pressure(), 5)
        )
    };
    writeln!(writer, "# Exact Riemann solution for problem:\t{}", tube.name)?;
    writeln!(writer, "# Discretization:\t{}", grid.discretization())?;
    writeln!(
        writer,
        "# Domain bounds:\t{}\t{}",
        scientific(x_min, 5),
        scientific(x_max, 5)
    )?;
    writeln!(writer, "# Interface position:\t{}", scientific(tube.x0, 5))?;
    writeln!(writer, "# Gamma:\t{}", scientific(gamma.gamma(), 5))?;
    writeln!(writer, "# Left  state [dens,velx,pres]:\t{}", state(&tube.left))?;
    writeln!(writer, "# Right state [dens,velx,pres]:\t{}", state(&tube.right))?;
    writeln!(writer, "# Time:\t{}", scientific(tube.time, 5))
}

fn write_row<W: Write>(writer: &mut W, values: &[f64]) -> io::Result<()> {
    let row = values
        .iter()
        .map(|value| format!("{:>17}", scientific(*value, 9)))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(writer, "{row}")
}

/// Write the sampled solution of `tube` on `grid` as a tab-delimited table.
///
/// Columns: position, density, momentum, total energy density, pressure,
/// specific internal energy, velocity and sound speed.
pub fn write_profile<W: Write>(
    writer: &mut W,
    tube: &ShockTube,
    grid: &Grid,
    gamma: &AdiabaticIndex,
    samples: &[SampleResult],
) -> io::Result<()> {
    if samples.len() != grid.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "got {} samples for a grid of {} points",
                samples.len(),
                grid.len()
            ),
        ));
    }

    write_header(writer, tube, grid, gamma)?;
    let header = COLUMNS
        .iter()
        .map(|name| format!("{:>17}", name))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(writer, "{header}")?;

    for (x, sample) in grid.positions().iter().zip(samples) {
        let conserved = sample.conserved(gamma);
        write_row(
            writer,
            &[
                *x,
                sample.density(),
                conserved.momentum(),
                conserved.energy(),
                sample.pressure(),
                sample.internal_energy(),
                sample.velocity(),
                sample.sound_speed(),
            ],
        )?;
    }
    Ok(())
}

/// The initial condition in conserved variables as a step profile:
/// left state on `[x_min, x0]`, right state on `[x0, x_max]`.
pub fn reference_profile(
    tube: &ShockTube,
    bounds: (f64, f64),
    gamma: &AdiabaticIndex,
) -> [(f64, State<Conserved>); 4] {
    let left = State::<Conserved>::from_primitives(&tube.left, gamma);
    let right = State::<Conserved>::from_primitives(&tube.right, gamma);
    [
        (bounds.0, left),
        (tube.x0, left),
        (tube.x0, right),
        (bounds.1, right),
    ]
}

pub fn write_reference_profile<W: Write>(
    writer: &mut W,
    tube: &ShockTube,
    grid: &Grid,
    gamma: &AdiabaticIndex,
) -> io::Result<()> {
    write_header(writer, tube, grid, gamma)?;
    let header = COLUMNS[..4]
        .iter()
        .map(|name| format!("{:>17}", name))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(writer, "{header}")?;
    for (x, conserved) in reference_profile(tube, grid.bounds(), gamma) {
        write_row(
            writer,
            &[x, conserved.density(), conserved.momentum(), conserved.energy()],
        )?;
    }
    Ok(())
}
