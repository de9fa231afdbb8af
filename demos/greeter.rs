use bindarg::derive::*;
use bindarg::prelude::*;
use bindarg::{BoundCommand, Dispatcher, Parameters, TypeaheadToken};

#[derive(Debug, Default, BindOptions)]
struct Options {
    #[bindarg(flag = "name", required, help = "Who to greet.")]
    name: String,
    #[bindarg(flag = "country", help = "A single word country code.")]
    country: Option<TypeaheadToken>,
    #[bindarg(flag = "times", help = "How many times to greet.")]
    times: Option<u32>,
    #[bindarg(flag = "loud")]
    loud: bool,
    #[bindarg(flag = "also", help = "Others to greet.")]
    also: Vec<String>,
}

struct Greeter;

impl Command for Greeter {
    type Options = Options;

    fn execute_options(&self, options: &Options) -> i32 {
        let mut names = vec![options.name.clone()];
        names.extend(options.also.iter().cloned());
        let greeting = match &options.country {
            Some(country) => format!("Hello from {country}"),
            None => "Hello".to_string(),
        };

        for _ in 0..options.times.unwrap_or(1) {
            let message = format!("{greeting}, {}!", names.join(" & "));

            if options.loud {
                println!("{}", message.to_uppercase());
            } else {
                println!("{message}");
            }
        }

        Self::success()
    }
}

fn main() {
    let mut command = BoundCommand::new(Greeter);
    let exit_code = Dispatcher::from_env().run(&mut command, &Parameters::from_env());
    std::process::exit(exit_code);
}
