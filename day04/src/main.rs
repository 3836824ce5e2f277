use day04::{DEFAULT_END, DEFAULT_START, ParseRangeError, par_scan, parse_range};

fn main() -> Result<(), ParseRangeError> {
    env_logger::init();

    let range = if let Some(arg) = std::env::args().nth(1) {
        log::info!("Range from argument: {:?}", arg);
        parse_range(&arg)?
    } else if let Ok(input) = std::fs::read_to_string("input.txt") {
        log::info!("Range from input.txt: {:?}", input.trim());
        parse_range(&input)?
    } else {
        log::info!("Default range");
        DEFAULT_START..DEFAULT_END
    };
    log::info!("Scanning {:?}", range);

    let counts = par_scan(range);
    log::debug!("{:?}", counts);
    println!("Amount of numbers in range (rule 1): {}", counts.rule1);
    println!("Amount of numbers in range (rule 2): {}", counts.rule2);
    Ok(())
}
