//! Status line helpers

/// `✓ message` on stdout
pub fn print_success(message: &str) {
    println!("✓ {}", message);
}

/// `ℹ message` on stdout
pub fn print_info(message: &str) {
    println!("ℹ {}", message);
}

/// `✗ message` on stderr
pub fn print_error(message: &str) {
    eprintln!("✗ {}", message);
}
