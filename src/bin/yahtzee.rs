//! Terminal front end: plays a game over stdin/stdout.
//!
//! Players are asked for interactively unless `--config FILE` names a JSON
//! game config. `--seed S` fixes the dice stream.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use rustc_hash::FxHashMap;

use yahtzee_engine::core::{MAX_PLAYERS, MAX_PLAYER_NAME, MIN_PLAYERS};
use yahtzee_engine::rules::can_play;
use yahtzee_engine::scoring::{score, BONUS_YAHTZEE_SCORE};
use yahtzee_engine::{
    Category, Collaborator, DiceSet, Game, GameConfig, GameEvent, GameOutcome, GameResult, Player,
    Standing, TurnAction,
};

/// Width of a category name column.
const PLAY_PAD: usize = 15;
const DIVIDER_LENGTH: usize = 26;

fn play_keys() -> FxHashMap<char, Category> {
    let mut keys = FxHashMap::default();
    for (key, category) in ('1'..='6').zip(Category::UPPER) {
        keys.insert(key, category);
    }
    keys.insert('k', Category::ThreeOfAKind);
    keys.insert('K', Category::FourOfAKind);
    keys.insert('s', Category::LowStraight);
    keys.insert('S', Category::HighStraight);
    keys.insert('h', Category::FullHouse);
    keys.insert('c', Category::Chance);
    keys.insert('y', Category::Yahtzee);
    keys
}

fn action_keys() -> FxHashMap<char, TurnAction> {
    let mut keys = FxHashMap::default();
    keys.insert('r', TurnAction::Reroll);
    keys.insert('k', TurnAction::Keep);
    keys.insert('a', TurnAction::SelectAll);
    keys.insert('q', TurnAction::Quit);
    for (index, key) in ('1'..='5').enumerate() {
        keys.insert(key, TurnAction::Hold(index));
    }
    keys
}

/// Result of parsing one line of action keys.
#[derive(Debug, PartialEq, Eq)]
enum ActionLine {
    Actions(Vec<TurnAction>),
    Help,
    Unrecognized(char),
}

fn parse_actions(line: &str, keys: &FxHashMap<char, TurnAction>) -> ActionLine {
    let mut actions = Vec::new();
    for c in line.trim().chars() {
        if c == '?' {
            return ActionLine::Help;
        }
        match keys.get(&c) {
            Some(&action) => actions.push(action),
            None => return ActionLine::Unrecognized(c),
        }
    }
    ActionLine::Actions(actions)
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn action_name(action: TurnAction) -> String {
    match action {
        TurnAction::Hold(index) => format!("TOGGLE_{}", index + 1),
        TurnAction::SelectAll => "SELECT_ALL".to_string(),
        TurnAction::Reroll => "REROLL".to_string(),
        TurnAction::Keep => "KEEP".to_string(),
        TurnAction::Quit => "QUIT".to_string(),
    }
}

/// Console collaborator over any line reader and writer.
struct Console<I, O> {
    input: I,
    output: O,
    play_keys: FxHashMap<char, Category>,
    action_keys: FxHashMap<char, TurnAction>,
    names: Vec<String>,
}

impl<I: BufRead, O: Write> Console<I, O> {
    fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            play_keys: play_keys(),
            action_keys: action_keys(),
            names: Vec::new(),
        }
    }

    fn say(&mut self, text: &str) {
        // a closed stdout leaves nothing useful to report to
        let _ = writeln!(self.output, "{text}");
    }

    /// Prompt and read one line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }

    /// Ask for a number in `min..=max` until one is given.
    fn ask_number(&mut self, msg: &str, min: usize, max: usize) -> Option<usize> {
        loop {
            let line = self.prompt(&format!("{msg} ({min}-{max}): "))?;
            if let Ok(n) = line.trim().parse::<usize>() {
                if (min..=max).contains(&n) {
                    return Some(n);
                }
            }
        }
    }

    fn ask_players(&mut self) -> Option<Vec<String>> {
        let count = self.ask_number("How many players are there?", MIN_PLAYERS, MAX_PLAYERS)?;
        let mut names = Vec::with_capacity(count);
        for seat in 1..=count {
            loop {
                let name = self.prompt(&format!("What is player {seat}'s name? "))?;
                let name = name.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                    break;
                }
            }
        }
        Some(names)
    }

    fn name_of(&self, index: usize) -> &str {
        self.names.get(index).map_or("?", String::as_str)
    }

    fn show_dice(&mut self, faces: &[u8]) {
        let mut text = String::from("Rolls:\n");
        for (i, face) in faces.iter().enumerate() {
            text.push_str(&format!("{}: {face}\n", i + 1));
        }
        self.say(&text);
    }

    fn show_actions(&mut self) {
        let mut entries: Vec<_> = self.action_keys.iter().map(|(&k, &a)| (k, a)).collect();
        entries.sort_by_key(|&(key, _)| key);
        let help: Vec<_> = entries
            .into_iter()
            .map(|(key, action)| format!("{} [{key}]", action_name(action)))
            .collect();
        self.say(&help.join(" "));
    }

    fn show_score_info(&mut self, player: &Player) {
        let board = &player.scoreboard;
        let bonus_yahtzees = board.bonus_yahtzee_count();
        let text = format!(
            "Name: {}\nUpper Score: {}\nUpper Bonus: {} [{:+}]\nLower Score: {}\nBonus Yahtzee: {} ({})\nTotal Score: {}",
            player.name(),
            board.upper_raw(),
            board.upper_bonus(),
            board.bonus_differential(),
            board.lower_total(),
            bonus_yahtzees,
            i64::from(bonus_yahtzees) * i64::from(BONUS_YAHTZEE_SCORE),
            board.total(),
        );
        self.say(&text);
    }

    fn show_plays(&mut self, player: &Player, dice: &DiceSet, offered: &[Category], bonus: bool) {
        let mut keyed: Vec<_> = self
            .play_keys
            .iter()
            .filter(|&(_, &c)| offered.contains(&c))
            .map(|(&k, &c)| (k, c))
            .collect();
        keyed.sort_by_key(|&(_, category)| category);

        let mut text = format!("{} please choose from:\n", player.name());
        let mut divided = false;
        for (key, category) in keyed {
            if !divided && !category.is_upper() {
                text.push_str(&"-".repeat(DIVIDER_LENGTH));
                text.push('\n');
                divided = true;
            }
            let value = if can_play(player, category, dice) {
                score(category, &player.scoreboard, dice, bonus).to_string()
            } else {
                format!("X ({})", player.scoreboard.value(category))
            };
            text.push_str(&format!("{} [{key}] - {value}\n", pad(category.name(), PLAY_PAD)));
        }
        self.say(&text);
    }

    fn show_leaderboard(&mut self, standings: &[Standing]) {
        let mut text = String::from("\nLeaderboard:\n");
        for (rank, row) in standings.iter().enumerate() {
            text.push_str(&format!(
                "{}.  {:<width$}  {:>3}   ({} Yahtzees{})\n",
                rank + 1,
                row.name,
                row.score,
                row.yahtzees,
                if row.upper_bonus { ", upper score bonus" } else { "" },
                width = MAX_PLAYER_NAME,
            ));
        }
        self.say(&text);
    }

    fn show_result(&mut self, result: &GameResult) {
        let text = match result {
            GameResult::Winner { player, score } => format!(
                "The winner is {}, with a score of {score} points!",
                self.name_of(player.index())
            ),
            GameResult::Tie { players, score } => {
                let names: Vec<_> = players.iter().map(|p| self.name_of(p.index())).collect();
                format!(
                    "It's a {} way draw between {}, with a score of {score} points!",
                    players.len(),
                    names.join(", ")
                )
            }
        };
        self.say(&text);
    }
}

impl<I: BufRead, O: Write> Collaborator for Console<I, O> {
    fn request_actions(&mut self, player: &Player, _: &DiceSet) -> Vec<TurnAction> {
        loop {
            let prompt = format!("{}, please enter your action (? for help): ", player.name());
            let Some(line) = self.prompt(&prompt) else {
                return vec![TurnAction::Quit];
            };
            match parse_actions(&line, &self.action_keys) {
                ActionLine::Actions(actions) if !actions.is_empty() => return actions,
                ActionLine::Actions(_) => {}
                ActionLine::Help => self.show_actions(),
                ActionLine::Unrecognized(c) => self.say(&format!("Unrecognized command '{c}'")),
            }
        }
    }

    fn request_category(
        &mut self,
        player: &Player,
        dice: &DiceSet,
        available: &[Category],
        is_bonus_yahtzee: bool,
    ) -> Category {
        loop {
            self.say("");
            self.show_score_info(player);
            let faces = dice.faces();
            self.show_dice(&faces);
            self.show_plays(player, dice, available, is_bonus_yahtzee);

            let Some(line) = self.prompt("Enter play: ") else {
                // out of input: take anything legal so the turn can end
                return available
                    .iter()
                    .copied()
                    .find(|&c| can_play(player, c, dice))
                    .unwrap_or(Category::Chance);
            };
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match self.play_keys.get(&c) {
                    Some(&category) => return category,
                    None => self.say(&format!("Unrecognized input '{line}'")),
                },
                _ => self.say("Expected one character, please re-enter"),
            }
        }
    }

    fn confirm_zero_score(&mut self, category: Category, value: i32) -> bool {
        let prompt = format!("Score {value} in {category}? (y|n): ");
        self.prompt(&prompt)
            .map_or(true, |answer| answer.trim().eq_ignore_ascii_case("y"))
    }

    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { players } => {
                self.names = players.clone();
                self.say(&format!("Starting a game for {}", players.join(", ")));
            }
            GameEvent::TurnStarted { player, round } => {
                let name = self.name_of(player.index()).to_string();
                self.say(&format!("\nRound {round}: {name}'s turn"));
            }
            GameEvent::DiceRolled { faces, rerolls_remaining, .. } => {
                self.show_dice(faces);
                self.say(&format!("{rerolls_remaining} rerolls left"));
            }
            GameEvent::NoDiceSelected { .. } => {
                self.say("No dice selected, toggle dice with 1-5 or select all with 'a'");
            }
            GameEvent::OutOfRerolls { .. } => self.say("No rerolls left"),
            GameEvent::CategoryRejected { category, .. } => {
                self.say(&format!("{category} has already been played"));
            }
            GameEvent::ZeroScoreDeclined { .. } => {}
            GameEvent::ScoreCommitted { player, category, score } => {
                let name = self.name_of(player.index()).to_string();
                self.say(&format!("{name} scored {score} in {category}"));
            }
            GameEvent::BonusYahtzee { score, .. } => {
                self.say(&format!("Bonus Yahtzee! +{score} points, choose another play"));
            }
            GameEvent::AutoFilled { category, score, .. } => {
                self.say(&format!("{category} filled with {score}"));
            }
            GameEvent::PlayerQuit { player } => {
                let name = self.name_of(player.index()).to_string();
                self.say(&format!("{name} quit the game"));
            }
            GameEvent::GameFinished { result, standings } => {
                self.show_leaderboard(standings);
                self.show_result(result);
            }
        }
    }
}

struct Args {
    seed: Option<u64>,
    config: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed = None;
    let mut config = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed needs a value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            "--config" => {
                i += 1;
                config = Some(args.get(i).ok_or("--config needs a path")?.clone());
            }
            "--help" | "-h" => {
                println!("Usage: yahtzee [--seed S] [--config FILE]");
                println!();
                println!("  --seed S       Dice seed (default: random)");
                println!("  --config FILE  JSON game config with player_names and seed");
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(Args { seed, config })
}

fn load_config<I: BufRead, O: Write>(
    args: &Args,
    console: &mut Console<I, O>,
) -> Result<Option<GameConfig>, String> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
            GameConfig::from_json_str(&json).map_err(|e| e.to_string())?
        }
        None => match console.ask_players() {
            Some(names) => GameConfig::new(names).with_seed(rand::random()),
            None => return Ok(None),
        },
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(Some(config))
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let Some(config) = load_config(&args, &mut console)? else {
        return Ok(());
    };
    let mut game = Game::from_config(&config).map_err(|e| e.to_string())?;

    match game.play(&mut console).map_err(|e| e.to_string())? {
        GameOutcome::Finished(_) => {}
        GameOutcome::Quit { .. } => console.show_leaderboard(&game.leaderboard()),
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
