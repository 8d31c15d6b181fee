//! # Interactive Menu
//!
//! The numbered menu shown when `moviedb` runs without a subcommand. It loops
//! until `0` or end of input. Errors from a choice are printed and the loop
//! goes on; only I/O failures on the terminal itself end it.
//!
//! Delete and update keep asking until an existing title is entered, checking
//! membership through the API before calling into the store.

use super::render::{
    render_messages, render_movie_list, render_output_path, render_rated_list, render_stats,
};
use console::style;
use moviedb::api::{CmdMessage, CmdResult, MovieApi};
use moviedb::error::Result;
use moviedb::store::CatalogStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU_ITEMS: [&str; 10] = [
    "Quit",
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Generate website",
];

enum Flow {
    Continue,
    Quit,
}

pub(super) fn run<S: CatalogStore>(api: &mut MovieApi<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout());
    menu.run(api)
}

pub(super) struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run<S: CatalogStore>(&mut self, api: &mut MovieApi<S>) -> Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt("\nEnter a choice (0-9): ")? {
                Some(choice) => choice,
                None => break,
            };
            debug!(choice = %choice, "menu choice");

            match self.dispatch(api, choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    let message = CmdMessage::error(format!("Error: {}", e));
                    self.write(&render_messages(&[message]))?;
                }
            }
        }
        self.write("Bye!\n")?;
        Ok(())
    }

    fn dispatch<S: CatalogStore>(&mut self, api: &mut MovieApi<S>, choice: &str) -> Result<Flow> {
        match choice {
            "0" => return Ok(Flow::Quit),
            "1" => {
                let result = api.list_movies()?;
                self.write("\n")?;
                self.write(&render_messages(&result.messages))?;
                self.write(&render_movie_list(&result.listed_movies))?;
            }
            "2" => {
                let Some(title) = self.prompt("\nEnter movie name: ")? else {
                    return Ok(Flow::Quit);
                };
                let result = api.add_movie(title.trim())?;
                self.print_result(&result)?;
            }
            "3" => loop {
                let Some(title) = self.prompt("\nEnter a movie you want to delete: ")? else {
                    return Ok(Flow::Quit);
                };
                if api.has_movie(&title)? {
                    let result = api.delete_movie(&title)?;
                    self.print_result(&result)?;
                    break;
                }
                self.write("\nError: Movie not in list!\n")?;
            },
            "4" => loop {
                let Some(title) = self.prompt("\nEnter a movie you want to update: ")? else {
                    return Ok(Flow::Quit);
                };
                if api.has_movie(&title)? {
                    let Some(notes) = self.prompt("\nEnter a note: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let result = api.update_movie(&title, &notes)?;
                    self.print_result(&result)?;
                    break;
                }
                self.write("Movie is not in list!\n")?;
            },
            "5" => {
                let result = api.stats()?;
                self.write("\n")?;
                if let Some(stats) = &result.stats {
                    self.write(&render_stats(stats))?;
                }
                self.print_result(&result)?;
            }
            "6" => {
                let result = api.random_movie()?;
                self.write("\n")?;
                self.write(&render_rated_list(&result.listed_movies))?;
                self.print_result(&result)?;
            }
            "7" => {
                let Some(term) = self.prompt("\nEnter part of the movie name: ")? else {
                    return Ok(Flow::Quit);
                };
                let result = api.search_movies(&term)?;
                self.write(&render_rated_list(&result.listed_movies))?;
                self.print_result(&result)?;
            }
            "8" => {
                let result = api.sorted_movies()?;
                self.write("\n")?;
                self.write(&render_rated_list(&result.listed_movies))?;
            }
            "9" => {
                let result = api.generate_website()?;
                self.print_result(&result)?;
                if let Some(path) = &result.output_path {
                    self.write(&render_output_path(path))?;
                }
            }
            other => {
                let message = CmdMessage::warning(format!("Invalid choice: {}", other));
                self.write(&render_messages(&[message]))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        let mut text = format!(
            "\n{}\n\n    Menu:\n",
            style("********** My Movies Database **********").bold()
        );
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            text.push_str(&format!("    {}. {}\n", i, item));
        }
        self.write(&text)
    }

    /// `None` on end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.write(question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        self.write(&render_messages(&result.messages))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
