use inquiry_config::Config;
use inquiry_core_contact_contracts::ContactFeatureService;

use crate::environment::Environment;

/// Prints the options for "How did you hear about us?", one per line.
pub fn print_options(config: &Config) {
    for option in Environment::new(config)
        .contact_feature()
        .hear_about_us_options()
    {
        println!("{option}");
    }
}
