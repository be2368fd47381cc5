use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use remote_starter::test_harness::{run_scenario, ScenarioConfig};
use remote_starter::{Person, VehicleKind};

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Command::new("remote-starter")
        .version("0.1.0")
        .about("Delegate pattern playground: a person, a remote starter, and whatever answers it")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("demo")
                .about("Wire up the tutorial scenario and press the starter")
                .arg(
                    Arg::new("owner")
                        .long("owner")
                        .default_value("Janet")
                        .help("Name of the person holding the fob"),
                )
                .arg(
                    Arg::new("vehicle")
                        .long("vehicle")
                        .default_value("car")
                        .help("Vehicle to bind: car, motorcycle or rocketship"),
                )
                .arg(
                    Arg::new("presses")
                        .long("presses")
                        .default_value("1")
                        .value_parser(value_parser!(u64))
                        .help("Number of button presses"),
                )
                .arg(
                    Arg::new("unbound")
                        .long("unbound")
                        .action(ArgAction::SetTrue)
                        .help("Skip the binding step and press anyway"),
                ),
        )
        .subcommand(
            Command::new("rehearse")
                .about("Run the scenario against a recording starter and report")
                .arg(
                    Arg::new("owner")
                        .long("owner")
                        .default_value("Janet")
                        .help("Name of the person holding the fob"),
                )
                .arg(
                    Arg::new("vehicle")
                        .long("vehicle")
                        .default_value("car")
                        .help("Vehicle to bind: car, motorcycle or rocketship"),
                )
                .arg(
                    Arg::new("presses")
                        .long("presses")
                        .default_value("1")
                        .value_parser(value_parser!(u64))
                        .help("Number of button presses"),
                )
                .arg(
                    Arg::new("unbound")
                        .long("unbound")
                        .action(ArgAction::SetTrue)
                        .help("Leave the starter unbound for the run"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        );

    let matches = cli.get_matches();

    let result = match matches.subcommand() {
        Some(("demo", args)) => run_demo(args),
        Some(("rehearse", args)) => run_rehearse(args),
        _ => Ok(()),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

fn run_demo(args: &ArgMatches) -> anyhow::Result<()> {
    let owner = args.get_one::<String>("owner").unwrap();
    let presses = *args.get_one::<u64>("presses").unwrap();

    let mut person = Person::new(owner.clone());

    if args.get_flag("unbound") {
        println!("{} presses the starter with nothing hooked up...", person.name());
    } else {
        let kind: VehicleKind = args.get_one::<String>("vehicle").unwrap().parse()?;
        person.bind(kind.build());
        println!("{} hooks the remote starter up to the {}.", person.name(), kind);
    }

    for _ in 0..presses {
        person.press_starter();
    }

    Ok(())
}

fn run_rehearse(args: &ArgMatches) -> anyhow::Result<()> {
    let vehicle = if args.get_flag("unbound") {
        None
    } else {
        Some(args.get_one::<String>("vehicle").unwrap().parse::<VehicleKind>()?)
    };

    let config = ScenarioConfig {
        owner: args.get_one::<String>("owner").unwrap().clone(),
        vehicle,
        presses: *args.get_one::<u64>("presses").unwrap(),
    };

    let report = run_scenario(config);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.generate_text());
    }

    std::process::exit(if report.passed() { 0 } else { 1 });
}
