//! Sample command - print a canonical purchase-order email.
//!
//! Useful for trying the parser without hunting for a real email:
//! `poex sample | poex parse --format text`.

use clap::Args;

/// Arguments for the sample command.
#[derive(Args)]
pub struct SampleArgs {}

const SAMPLE_EMAIL: &str = "\
Purchase Order #PO-12345
From: office@acmesupplies.com
Date: May 14, 2023

VENDOR: TechComponents Inc.
SHIPPING ADDRESS: 123 Business Park, Suite 400, San Francisco, CA 94107

ITEMS:
1. Premium SSD Drive 500GB
   Quantity: 5
   Unit Cost: $89.99
   Total: $449.95

2. Wireless Keyboard MK-7
   Quantity: 10
   Unit Cost: $45.50
   Total: $455.00

SUMMARY:
Subtotal: $904.95
Shipping: $24.99
Tax (8.5%): $76.92
Total: $1,006.86

SHIPPING INFORMATION:
Carrier: FedEx
Tracking Number: FX-78901234567
Estimated Delivery: May 20, 2023
";

pub fn run(_args: SampleArgs) -> anyhow::Result<()> {
    print!("{}", SAMPLE_EMAIL);
    Ok(())
}
