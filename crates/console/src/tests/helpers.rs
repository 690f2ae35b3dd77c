// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::prompt::Prompt;
use std::io::Cursor;

pub type TestPrompt = Prompt<Cursor<Vec<u8>>, Vec<u8>>;

pub fn create_test_prompt(input: &str) -> TestPrompt {
    Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output_of(prompt: TestPrompt) -> String {
    let (_input, output) = prompt.into_parts();
    String::from_utf8(output).unwrap()
}
