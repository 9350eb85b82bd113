use colored::*;

use crate::terminal::print;

const ART: &str = r#"
   __  __    _    ______     _______ _   _ ____
  |  \/  |  / \  / ___\ \   / / ____| \ | |  _ \
  | |\/| | / _ \| |    \ \ / /|  _| |  \| | | | |
  | |  | |/ ___ \ |___  \ V / | |___| |\  | |_| |
  |_|  |_/_/   \_\____|  \_/  |_____|_| \_|____/
"#;

pub fn print() {
    print::print(&format!("{}", ART.bright_green().bold()));
}
