//! Capture fixtures shared across CLI integration tests.
#![allow(dead_code)]

use runscan_testing::CaptureBuilder;

/// Two attempts: a 5 s death, then one reaching nether, both structures and blind.
///
/// Published as:
/// - run 1: runTime 00.05.000, death, timestamps 00:00:00 / 00:00:06
/// - run 2: runTime 00.06.000, nether 2, bastion 3, fort 4, blind 5
pub fn two_attempts() -> CaptureBuilder {
    CaptureBuilder::new()
        .attempt(5)
        .death("You Died! LUL")
        .misread("0O.l2.3g")
        .dropout()
        .tick(0)
        .tick(0)
        .tick(1)
        .tick(2)
        .achievement("We Need to Go Deeper")
        .tick(3)
        .achievement("Those Were the Days!")
        .tick(4)
        .achievement("Terrible Fortress")
        .tick(5)
        .ninja("Certain: 91%")
        .tick(6)
        .tick(7)
}

/// Published runs spread over two dates, for stats and odds.
pub const RUNS_JSON: &str = r#"[
  {"date":"Feb 03","runTime":"07.00.000","bastion":200,"fort":300,"blind":400,"timestamps":[]},
  {"date":"Feb 03","runTime":"04.30.000","bastion":250,"timestamps":[]},
  {"date":"Feb 03","runTime":"01.10.000","nether":60,"timestamps":[]},
  {"date":"Feb 03","runTime":"00.20.000","death":"You Died! LUL","timestamps":[]},
  {"date":"Feb 04","runTime":"12.00.000","fort":220,"bastion":330,"blind":500,"stronghold":700,"timestamps":[]},
  {"date":"Feb 04","runTime":"00.45.000","timestamps":[]}
]"#;
