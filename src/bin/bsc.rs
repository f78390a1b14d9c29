use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use bitmeasure::channel::{
    binary_entropy, channel_capacity, explain_binary_entropy, explain_channel_capacity,
};

/// Interactive binary symmetric channel capacity calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {}

fn main() -> Result<()> {
    Arguments::parse();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Binary Symmetric Channel (BSC) Capacity Calculator!");

    loop {
        print!("Enter the probability of a bit being flipped (between 0 and 1): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let p: f64 = match line?.trim().parse() {
            Ok(p) => p,
            Err(_) => {
                println!("Invalid input. Please enter a numeric value.");
                continue;
            }
        };
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&p) {
            println!("Please enter a probability between 0 and 1.");
            continue;
        }

        println!();
        println!("For a Binary Symmetric Channel with flip probability p = {p}:");

        println!("- The binary entropy H(p) is: {:.4}", binary_entropy(p));
        println!("{}", explain_binary_entropy(p));

        println!("- The channel capacity C is: {:.4}", channel_capacity(p));
        println!("{}", explain_channel_capacity(p));

        print!("\nWould you like to calculate again? (yes/no): ");
        io::stdout().flush()?;
        let Some(again) = lines.next() else { break };
        if !again?.trim().eq_ignore_ascii_case("yes") {
            println!("Thank you for using the BSC Capacity Calculator!");
            break;
        }
    }

    Ok(())
}
