//! Plugin and parameter information.

use octaver_core::{DEFAULT_CAPACITY, ParameterInfo};
use octaver_effects::{DRY_GAIN, Octaver, SILENCE_THRESHOLD, WET_GAIN};
use octaver_plugin::{PLUGIN_URI, PortDirection, PortKind, descriptor};

pub fn run() -> anyhow::Result<()> {
    let octaver = Octaver::new(48000.0);

    println!("Plugin URI:  {PLUGIN_URI}");
    if let Some(desc) = descriptor(0) {
        println!("Name:        {}", desc.name);
        println!("\nPorts:");
        for port in desc.ports {
            let kind = match (port.kind, port.direction) {
                (PortKind::Control, _) => "control in",
                (PortKind::Audio, PortDirection::Input) => "audio in",
                (PortKind::Audio, PortDirection::Output) => "audio out",
            };
            println!("  {:<2} {:<6} {}", port.index as u32, port.symbol, kind);
        }
    }

    println!("\nParameters:");
    println!(
        "  {:<3} {:<8} {:<10} {:>10} {:>10} {:>10}",
        "#", "Name", "ID", "Min", "Max", "Default"
    );
    for i in 0..octaver.param_count() {
        if let Some(desc) = octaver.param_info(i) {
            println!(
                "  {:<3} {:<8} {:<10} {:>10} {:>10} {:>10}",
                i,
                desc.name,
                desc.string_id,
                desc.format_value(desc.min),
                desc.format_value(desc.max),
                desc.format_value(desc.default)
            );
        }
    }

    println!("\nFixed:");
    println!("  Wet gain:          {WET_GAIN}");
    println!("  Dry gain:          {DRY_GAIN}");
    println!("  Silence threshold: {SILENCE_THRESHOLD}");
    println!("  Ring capacity:     {DEFAULT_CAPACITY} samples");

    Ok(())
}
