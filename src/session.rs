//! The console menu. A [`Session`] owns the tree for the whole run and reads
//! whitespace-separated tokens from any `BufRead`, so several values may be
//! typed on one line.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use bst_menu::render::RenderOptions;
//! use bst_menu::session::Session;
//!
//! let input = Cursor::new("3 5 3 8\n3\n8\n");
//! let mut session = Session::new(input, Vec::new(), RenderOptions::default());
//! session.run().unwrap();
//!
//! let output = String::from_utf8(session.into_output()).unwrap();
//! assert!(output.contains("Tree (Inorder): 3 5 8\n"));
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::error::Error;
use crate::render::{self, RenderOptions};
use crate::tree::Tree;
use crate::util::Traversal;

const BANNER: &str = "\
==============================================
         Welcome to the Binary Search Tree Program
==============================================

This program allows you to create and interact with a Binary Search Tree (BST).
You can insert, delete, and display nodes in various traversal orders.

";

const MENU: &str = "

==================== BST Operations Menu ====================
1. Insert a new node
2. Delete an existing node
3. Display Inorder Traversal
4. Display Preorder Traversal
5. Display Postorder Traversal
6. Display Tree Structure
7. Display Graphical Tree Structure
8. Exit the program
-------------------------------------------------------------
Please select an option (1-8): ";

/// One entry of the operations menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Choice {
    Insert,
    Delete,
    Traverse(Traversal),
    Structure,
    Graphical,
    Exit,
}

impl Choice {
    fn from_token(token: &str) -> Option<Self> {
        match token.parse::<u8>().ok()? {
            1 => Some(Self::Insert),
            2 => Some(Self::Delete),
            3 => Some(Self::Traverse(Traversal::Inorder)),
            4 => Some(Self::Traverse(Traversal::Preorder)),
            5 => Some(Self::Traverse(Traversal::Postorder)),
            6 => Some(Self::Structure),
            7 => Some(Self::Graphical),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive run of the program: the tree plus the console it talks to.
pub struct Session<R, W> {
    tree: Tree<i32>,
    input: R,
    output: W,
    render: RenderOptions,
    /// Tokens read from the current input line but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty tree.
    pub fn new(input: R, output: W, render: RenderOptions) -> Self {
        Self {
            tree: Tree::new(),
            input,
            output,
            render,
            pending: VecDeque::new(),
        }
    }

    /// The tree as it currently stands.
    pub fn tree(&self) -> &Tree<i32> {
        &self.tree
    }

    /// Gives back the output handle, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the banner, asks for the initial keys, then serves the menu
    /// until the user exits or the input runs out.
    pub fn run(&mut self) -> Result<(), Error> {
        info!("session started");
        self.write(BANNER)?;

        if self.setup()? == Flow::Continue {
            while self.menu()? == Flow::Continue {}
        }

        self.output.flush().map_err(Error::Output)?;
        info!("session ended with {} keys in the tree", self.tree.len());
        Ok(())
    }

    fn setup(&mut self) -> Result<Flow, Error> {
        self.write("---------- Step 1: Initial Tree Setup ----------\n")?;
        let Some(count) = self.read_int("Enter the number of initial nodes to insert: ")? else {
            return Ok(Flow::Stop);
        };

        for i in 1..=count.max(0) {
            let Some(key) = self.read_int(&format!("Enter value for node {}: ", i))? else {
                return Ok(Flow::Stop);
            };
            let inserted = self.tree.insert(key);
            debug!("initial insert of {} (new: {})", key, inserted);
        }
        Ok(Flow::Continue)
    }

    fn menu(&mut self) -> Result<Flow, Error> {
        self.write(MENU)?;
        let Some(token) = self.next_token()? else {
            return Ok(Flow::Stop);
        };

        let Some(choice) = Choice::from_token(&token) else {
            warn!("rejected menu choice {:?}", token);
            self.pending.clear();
            self.write("\nInvalid option. Please enter a number between 1 and 8.\n")?;
            return Ok(Flow::Continue);
        };

        debug!("menu choice {:?}", choice);
        match choice {
            Choice::Insert => return self.insert(),
            Choice::Delete => return self.delete(),
            Choice::Traverse(order) => {
                let label = order.label();
                let line = render::traversal_line(&self.tree.traverse(order));
                self.write(&format!(
                    "\n--- {} Traversal ---\nTree ({}): {}\n",
                    label, label, line
                ))?;
            }
            Choice::Structure => {
                let text = render::structure(&self.tree, self.render.indent);
                self.write("\n--- Tree Structure ---\n")?;
                self.write(&text)?;
            }
            Choice::Graphical => {
                let text = render::graphical(&self.tree, self.render.spacing);
                self.write("\n--- Graphical Tree Structure ---\n")?;
                self.write(&text)?;
            }
            Choice::Exit => {
                self.write("\nThank you for using the Binary Search Tree Program. Goodbye!\n")?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self) -> Result<Flow, Error> {
        self.write("\n--- Insert Node ---\n")?;
        let Some(key) = self.read_int("Enter the value to insert: ")? else {
            return Ok(Flow::Stop);
        };

        if self.tree.insert(key) {
            debug!("inserted {}, {} keys now", key, self.tree.len());
            self.write(&format!(
                "Node with value {} has been successfully inserted.\n",
                key
            ))?;
        } else {
            debug!("ignored duplicate {}", key);
            self.write(&format!(
                "Value {} is already in the tree; nothing was inserted.\n",
                key
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, Error> {
        self.write("\n--- Delete Node ---\n")?;
        let Some(key) = self.read_int("Enter the value to delete: ")? else {
            return Ok(Flow::Stop);
        };

        match self.tree.delete(&key) {
            Some(removed) => {
                debug!("deleted {}, {} keys now", removed, self.tree.len());
                self.write(&format!("Node with value {} has been deleted.\n", removed))?;
            }
            None => {
                debug!("{} not found, nothing deleted", key);
                self.write(&format!("Value {} was not found in the tree.\n", key))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompts until an integer is typed. `None` means the input ended.
    fn read_int(&mut self, prompt: &str) -> Result<Option<i32>, Error> {
        loop {
            self.write(prompt)?;
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };

            match token.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!("rejected {:?}: {}", token, err);
                    self.pending.clear();
                    self.write("Invalid input: please enter an integer.\n")?;
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, Error> {
        self.output.flush().map_err(Error::Output)?;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(Error::Input)? == 0 {
                info!("input closed");
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn write(&mut self, text: &str) -> Result<(), Error> {
        self.output.write_all(text.as_bytes()).map_err(Error::Output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str) -> Session<Cursor<&str>, Vec<u8>> {
        Session::new(Cursor::new(input), Vec::new(), RenderOptions::default())
    }

    #[test]
    fn menu_numbers() {
        assert_eq!(Choice::from_token("1"), Some(Choice::Insert));
        assert_eq!(
            Choice::from_token("4"),
            Some(Choice::Traverse(Traversal::Preorder))
        );
        assert_eq!(Choice::from_token("8"), Some(Choice::Exit));
        assert_eq!(Choice::from_token("0"), None);
        assert_eq!(Choice::from_token("9"), None);
        assert_eq!(Choice::from_token("-1"), None);
        assert_eq!(Choice::from_token("two"), None);
    }

    #[test]
    fn tokens_span_lines() {
        let mut session = session("  1 2\n\n3\n");

        assert_eq!(session.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(session.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(session.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(session.next_token().unwrap(), None);
    }

    #[test]
    fn read_int_reprompts_and_drops_rest_of_line() {
        let mut session = session("abc 7\n-12\n");

        assert_eq!(session.read_int("> ").unwrap(), Some(-12));

        let output = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(output, "> Invalid input: please enter an integer.\n> ");
    }

    #[test]
    fn setup_inserts_initial_values() {
        let mut session = session("4\n5 3 8 3\n");

        assert_eq!(session.setup().unwrap(), Flow::Continue);
        assert_eq!(session.tree().inorder(), [&3, &5, &8]);
    }

    #[test]
    fn setup_with_negative_count_inserts_nothing() {
        let mut session = session("-3\n");

        assert_eq!(session.setup().unwrap(), Flow::Continue);
        assert!(session.tree().is_empty());
    }

    #[test]
    fn setup_stops_when_input_ends() {
        let mut session = session("3\n1\n");

        assert_eq!(session.setup().unwrap(), Flow::Stop);
        assert_eq!(session.tree().inorder(), [&1]);
    }
}
