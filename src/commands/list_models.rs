use anyhow::Result;

use crate::delegate::{DelegateSource, Launcher};

pub fn execute<S: DelegateSource>(launcher: &Launcher<S>) -> Result<i32> {
    launcher.run(&["list-models".to_string()])
}
