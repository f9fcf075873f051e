// Exclude entire file from coverage - binary entry point
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::process::ExitCode;

fn main() -> ExitCode {
    bag_lib::run()
}
