use crate::menu::{self, MenuChoice, CHOICE_HINT, CHOICE_PROMPT};
use crate::prompt::Prompter;
use bakery_inventory::inventory::{
    IngredientDraft, IngredientRepository, InMemoryIngredientRepository, InventoryError,
    InventoryService, Overwrite,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const SAVED: &str = "✅ Ingredient saved.";
const CANCELLED: &str = "Cancelled.";
const GOODBYE: &str = "Goodbye!";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop owning the single inventory for the lifetime of the process.
pub(crate) struct Session<R, W, S = InMemoryIngredientRepository> {
    prompter: Prompter<R, W>,
    inventory: InventoryService<S>,
    heading: String,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W, heading: impl Into<String>) -> Self {
        Self::with_inventory(input, output, heading, InventoryService::default())
    }
}

impl<R, W, S> Session<R, W, S>
where
    R: BufRead,
    W: Write,
    S: IngredientRepository,
{
    pub(crate) fn with_inventory(
        input: R,
        output: W,
        heading: impl Into<String>,
        inventory: InventoryService<S>,
    ) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            inventory,
            heading: heading.into(),
        }
    }

    pub(crate) fn inventory(&self) -> &InventoryService<S> {
        &self.inventory
    }

    /// Runs until the operator picks Exit or input ends. Only I/O failures are errors.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say(&menu::render(&self.heading))?;
            let Some(reply) = self.prompter.ask(CHOICE_PROMPT)? else {
                break;
            };

            let flow = match MenuChoice::parse(&reply) {
                Some(MenuChoice::Add) => self.add_ingredient()?,
                Some(MenuChoice::View) => self.view_all()?,
                Some(MenuChoice::Use) => self.use_ingredient()?,
                Some(MenuChoice::Search) => self.search_ingredient()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    debug!(reply = %reply, "unrecognized menu choice");
                    self.prompter.say(CHOICE_HINT)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!("session closed");
        self.prompter.say(GOODBYE)
    }

    fn add_ingredient(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Ingredient name (e.g., Flour): ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(err) = IngredientDraft::check_name(&name) {
            self.prompter.say(&err.to_string())?;
            return Ok(Flow::Continue);
        }

        let Some(unit) = self.prompter.ask("Unit (e.g., kg, litres, pieces): ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(err) = IngredientDraft::check_unit(&unit) {
            self.prompter.say(&err.to_string())?;
            return Ok(Flow::Continue);
        }

        let Some(quantity) = self.prompter.ask_quantity("Quantity: ")? else {
            return Ok(Flow::Exit);
        };

        let draft = IngredientDraft::new(name, unit, quantity);
        let result = match self.inventory.upsert(draft.clone(), Overwrite::Deny) {
            Err(InventoryError::Conflict { existing }) => {
                let question = format!(
                    "'{}' exists. Replace with new details? (y/n): ",
                    existing.display_name
                );
                match self.prompter.confirm(&question)? {
                    Some(true) => self.inventory.upsert(draft, Overwrite::Allow),
                    Some(false) => {
                        self.prompter.say(CANCELLED)?;
                        return Ok(Flow::Continue);
                    }
                    None => return Ok(Flow::Exit),
                }
            }
            other => other,
        };

        match result {
            Ok(_) => self.prompter.say(SAVED)?,
            Err(err) => self.prompter.say(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        let listing = self.inventory.listing();
        self.prompter.say(&listing.to_string())?;
        Ok(Flow::Continue)
    }

    fn use_ingredient(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Which ingredient did you use? ")? else {
            return Ok(Flow::Exit);
        };
        let unit = match self.inventory.lookup(&name) {
            Ok(record) => record.unit.clone(),
            Err(err) => {
                self.prompter.say(&err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let Some(used) = self
            .prompter
            .ask_quantity(&format!("Amount used ({unit}): "))?
        else {
            return Ok(Flow::Exit);
        };

        match self.inventory.deduct(&name, used) {
            Ok(record) => self.prompter.say(&format!(
                "Updated. {} now {} {}.",
                record.display_name, record.quantity, record.unit
            ))?,
            Err(err) => self.prompter.say(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn search_ingredient(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Search ingredient name: ")? else {
            return Ok(Flow::Exit);
        };
        let message = match self.inventory.lookup(&name) {
            Ok(record) => format!(
                "{}: {} {}",
                record.display_name, record.quantity, record.unit
            ),
            Err(err) => err.to_string(),
        };
        self.prompter.say(&message)?;
        Ok(Flow::Continue)
    }
}
