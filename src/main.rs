use diffcov::run_main;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run the shared main function
    run_main()?;
    Ok(())
}
