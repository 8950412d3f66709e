use anyhow::Result;

use crate::delegate::{DelegateSource, Launcher};

pub fn execute<S: DelegateSource>(launcher: &Launcher<S>, target: &str) -> Result<i32> {
    launcher.run(&["switch-model".to_string(), target.to_string()])
}
