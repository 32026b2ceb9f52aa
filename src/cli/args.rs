use clap::Args;

use super::parse::{parse_coord, parse_dimension};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Maze width in cells
    #[arg(value_parser = parse_dimension)]
    pub width: usize,

    /// Maze height in cells
    #[arg(value_parser = parse_dimension)]
    pub height: usize,

    /// Also print every cell with its grid neighbors
    #[arg(long)]
    pub connections: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Maze width in cells
    #[arg(value_parser = parse_dimension)]
    pub width: usize,

    /// Maze height in cells
    #[arg(value_parser = parse_dimension)]
    pub height: usize,

    /// Start cell as x,y (default: 0,0)
    #[arg(long, value_parser = parse_coord)]
    pub from: Option<(usize, usize)>,

    /// Target cell as x,y (default: the opposite corner)
    #[arg(long, value_parser = parse_coord)]
    pub to: Option<(usize, usize)>,

    /// Print the maze before the path
    #[arg(long)]
    pub render: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BatteryArgs {
    /// Exclusive upper bound for the size sweeps
    #[arg(long, default_value_t = 50, value_parser = parse_dimension)]
    pub max_size: usize,

    /// Print every maze, not just its statistics
    #[arg(long)]
    pub render: bool,
}
