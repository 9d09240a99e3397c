#[cfg(test)]
#[path = "../../tests/unit/reporting/problem_type_test.rs"]
mod problem_type_test;

use crate::utils::{GenericError, GenericResult};
use std::fmt;
use std::str::FromStr;

macro_rules! define_problem_types {
    ($($variant:ident => $name:literal: $description:literal,)+) => {
        /// Specifies a class of the problem being solved.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ProblemType {
            $(
                #[doc = $description]
                $variant,
            )+
        }

        impl ProblemType {
            /// Returns all known problem types.
            pub fn all() -> &'static [ProblemType] {
                &[$(ProblemType::$variant,)+]
            }

            /// Returns canonical name of the problem type.
            pub fn name(&self) -> &'static str {
                match self {
                    $(ProblemType::$variant => $name,)+
                }
            }
        }
    };
}

define_problem_types! {
    Tsp => "TSP": "Symmetric traveling salesman problem.",
    Atsp => "ATSP": "Asymmetric traveling salesman problem.",
    Sop => "SOP": "Sequential ordering problem.",
    Hcp => "HCP": "Hamiltonian cycle problem.",
    Hpp => "HPP": "Hamiltonian path problem.",
    Bwtsp => "BWTSP": "Black and white traveling salesman problem.",
    Ccvrp => "CCVRP": "Cumulative capacitated vehicle routing problem.",
    Cbtsp => "CBTSP": "Colored balanced traveling salesman problem.",
    Cbntsp => "CBnTSP": "Colored bounded traveling salesman problem.",
    Ctsp => "CTSP": "Colored traveling salesman problem.",
    CluVrp => "CluVRP": "Clustered vehicle routing problem.",
    Cvrp => "CVRP": "Capacitated vehicle routing problem.",
    Acvrp => "ACVRP": "Asymmetric capacitated vehicle routing problem.",
    Cvrptw => "CVRPTW": "Capacitated vehicle routing problem with time windows.",
    Gctsp => "GCTSP": "General colored traveling salesman problem.",
    Ktsp => "KTSP": "K-traveling salesman problem.",
    Mlp => "MLP": "Minimum latency problem.",
    Msctsp => "MSCTSP": "Maximum scatter colored traveling salesman problem.",
    MPdtsp => "M-PDTSP": "Multi-commodity pickup and delivery traveling salesman problem.",
    M1Pdtsp => "M1-PDTSP": "One-to-one multi-commodity pickup and delivery traveling salesman problem.",
    OnePdtsp => "1-PDTSP": "One-commodity pickup and delivery traveling salesman problem.",
    Ovrp => "OVRP": "Open vehicle routing problem.",
    Pdptw => "PDPTW": "Pickup and delivery problem with time windows.",
    Pdtsp => "PDTSP": "Pickup and delivery traveling salesman problem.",
    Pdtspf => "PDTSPF": "Pickup and delivery traveling salesman problem with FIFO loading.",
    Pdtspl => "PDTSPL": "Pickup and delivery traveling salesman problem with LIFO loading.",
    Rctvrp => "RCTVRP": "Risk-constrained cash-in-transit vehicle routing problem.",
    Rctvrptw => "RCTVRPTW": "Risk-constrained cash-in-transit vehicle routing problem with time windows.",
    SoftCvrp => "SOFTCVRP": "Capacitated vehicle routing problem with soft capacities.",
    Sttsp => "STTSP": "Steiner traveling salesman problem.",
    Trp => "TRP": "Traveling repairman problem.",
    Tspdl => "TSPDL": "Traveling salesman problem with draft limits.",
    Tsptw => "TSPTW": "Traveling salesman problem with time windows.",
    Vrpb => "VRPB": "Vehicle routing problem with backhauls.",
    Vrpbtw => "VRPBTW": "Vehicle routing problem with backhauls and time windows.",
}

impl ProblemType {
    /// Returns true if the problem maximizes its penalty term, so a gap computed against the penalty
    /// has an inverted sign.
    pub fn inverts_penalty_gap(&self) -> bool {
        matches!(self, ProblemType::Msctsp)
    }
}

impl Default for ProblemType {
    fn default() -> Self {
        ProblemType::Tsp
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProblemType {
    type Err = GenericError;

    fn from_str(value: &str) -> GenericResult<Self> {
        let value = value.trim();

        ProblemType::all()
            .iter()
            .find(|problem_type| problem_type.name().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| format!("unknown problem type: '{value}'").into())
    }
}
