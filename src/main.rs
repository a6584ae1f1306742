use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use temphygro_tx::controller::pause_for_address;
use temphygro_tx::logging::{log_info, log_warn};
use temphygro_tx::radio::duty_cycle::{duty_cycle_percent, DutyCycleTracker};
use temphygro_tx::radio::hal::{Clock, MockClock, MockLine, OutputLine};
use temphygro_tx::{
    init_logger, Frame, Payload, ProtocolVariant, TransmitterConfig, TransmitterController,
};

#[derive(Parser)]
#[command(name = "temphygro-cli")]
#[command(about = "CLI tool for TX868 temperature/humidity transmitters")]
struct Cli {
    /// JSON file with pin, address and variant
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ReadingArgs {
    /// Temperature in °C
    #[arg(short, long, allow_hyphen_values = true)]
    temperature: f32,
    /// Relative humidity in %
    #[arg(short = 'H', long, default_value = "0")]
    humidity: f32,
    /// Sensor address (0..7)
    #[arg(short, long)]
    address: Option<u8>,
    /// Protocol variant: v1.2 or v1.1
    #[arg(long)]
    variant: Option<ProtocolVariant>,
    /// Reject readings that do not fit the wire format instead of wrapping
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Clone)]
struct LineArgs {
    /// GPIO pin (BCM numbering)
    #[arg(short, long)]
    pin: Option<u8>,
    /// Simulate the line instead of driving GPIO
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show payload, frame bits and timing without transmitting
    Encode {
        #[command(flatten)]
        reading: ReadingArgs,
    },
    /// Transmit one reading
    Send {
        #[command(flatten)]
        reading: ReadingArgs,
        #[command(flatten)]
        line: LineArgs,
    },
    /// Transmit a reading repeatedly, pausing as recommended for the address
    Beacon {
        #[command(flatten)]
        reading: ReadingArgs,
        #[command(flatten)]
        line: LineArgs,
        /// Number of transmissions
        #[arg(short = 'n', long, default_value = "3")]
        count: u32,
    },
}

fn resolve_config(path: Option<&PathBuf>, reading: &ReadingArgs, pin: Option<u8>) -> Result<TransmitterConfig> {
    let config = match path {
        Some(path) => TransmitterConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TransmitterConfig::default(),
    };
    Ok(config.with_overrides(reading.address, reading.variant, pin))
}

fn encode(config: &TransmitterConfig, reading: &ReadingArgs) -> Result<Payload> {
    if reading.strict {
        Ok(Payload::try_encode(reading.temperature, reading.humidity, config.address)?)
    } else {
        Ok(Payload::encode(reading.temperature, reading.humidity, config.address))
    }
}

fn print_encoding(config: &TransmitterConfig, payload: &Payload) {
    let frame = Frame::build(payload, config.variant);
    let params = config.variant.params();
    println!("variant:      {} ({} kHz)", params.name, params.carrier_khz);
    println!("reading:      {payload}");
    println!("payload:      {:?}", payload.as_bytes());
    println!("payload hex:  {}", payload.to_hex());
    println!("checksum:     {}", payload.checksum());
    if params.checksum_nibbles == 2 {
        println!("sum check:    {}", payload.sum_check());
    }
    println!("frame bits:   {}", frame.to_bit_string());
    println!(
        "frame:        {} bits, {:.1} ms, carrier on {:.1} ms",
        frame.len(),
        frame.duration_us() as f64 / 1_000.0,
        frame.mark_time_us() as f64 / 1_000.0
    );
    println!(
        "transmission: {} repeat(s), {:.1} ms",
        params.repeat_count,
        params.transmission_duration_us() as f64 / 1_000.0
    );
}

async fn transmit_loop<L, C>(
    line: L,
    clock: C,
    config: TransmitterConfig,
    reading: ReadingArgs,
    count: u32,
    wait: bool,
) -> Result<()>
where
    L: OutputLine + Send + 'static,
    C: Clock + Send + 'static,
{
    let mut tx = TransmitterController::setup(line, clock, config.variant)?;
    tx.set_address(config.address);

    let params = config.variant.params();
    let transmission_us = params.transmission_duration_us();
    let airtime_us = params.airtime_us();
    let mut tracker = DutyCycleTracker::default();
    let mut schedule_us = 0u64;

    for i in 0..count {
        if !tracker.can_transmit(schedule_us, airtime_us) {
            log_warn("Duty cycle budget exceeded, transmitting anyway");
        }
        tracker.record(schedule_us, airtime_us);

        let (temperature, humidity, strict) = (reading.temperature, reading.humidity, reading.strict);
        let (returned, payload) = tokio::task::spawn_blocking(move || {
            let result = if strict {
                tx.try_send(temperature, humidity)
            } else {
                Ok(tx.send(temperature, humidity))
            };
            (tx, result)
        })
        .await
        .context("transmit task failed")?;
        tx = returned;
        let payload = payload?;
        log_info(&format!("Sent {} ({}/{})", payload, i + 1, count));

        let pause = tx.pause();
        schedule_us += transmission_us + pause.as_micros() as u64;
        if i + 1 < count {
            log_info(&format!(
                "Next transmission in {} s (duty cycle {:.3}%)",
                pause.as_secs(),
                duty_cycle_percent(airtime_us, pause)
            ));
            if wait {
                tokio::time::sleep(pause).await;
            }
        }
    }
    Ok(())
}

async fn run_on_line(config: TransmitterConfig, reading: ReadingArgs, line: LineArgs, count: u32) -> Result<()> {
    #[cfg(feature = "raspberry-pi")]
    {
        if !line.dry_run {
            use temphygro_tx::radio::hal::{MonotonicClock, RpiOutputLine};
            let gpio = RpiOutputLine::new(config.pin)
                .with_context(|| format!("opening GPIO {}", config.pin))?;
            return transmit_loop(gpio, MonotonicClock::new(), config, reading, count, true).await;
        }
    }

    #[cfg(not(feature = "raspberry-pi"))]
    {
        if !line.dry_run {
            log_warn("Built without the raspberry-pi feature, simulating the TX line");
        }
    }

    let clock = MockClock::new();
    let mock = MockLine::new(&clock);
    transmit_loop(mock.clone(), clock, config, reading, count, false).await?;

    let pulses = mock.pulses();
    let total_us = pulses
        .last()
        .map(|p| p.rise_us + p.width_us)
        .unwrap_or_default();
    println!(
        "simulated {} pulses on GPIO {} over {:.1} ms",
        pulses.len(),
        config.pin,
        total_us as f64 / 1_000.0
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { reading } => {
            let config = resolve_config(cli.config.as_ref(), &reading, None)?;
            let payload = encode(&config, &reading)?;
            print_encoding(&config, &payload);
            println!("pause:        {} s", pause_for_address(config.address));
        }
        Commands::Send { reading, line } => {
            let config = resolve_config(cli.config.as_ref(), &reading, line.pin)?;
            run_on_line(config, reading, line, 1).await?;
        }
        Commands::Beacon {
            reading,
            line,
            count,
        } => {
            let config = resolve_config(cli.config.as_ref(), &reading, line.pin)?;
            run_on_line(config, reading, line, count).await?;
        }
    }

    Ok(())
}
