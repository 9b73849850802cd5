use anyhow::Result;

use gomoku_ai::{
    game::{Game, GameState},
    narration::{LogSpeaker, Narrator},
    Difficulty, Move, Player, BOARD_SIZE,
};

mod terminal;
use terminal::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!(
        "Welcome to Gomoku: get five in a row on a {0}x{0} board\n",
        BOARD_SIZE
    );

    let mut narrator = Narrator::new(LogSpeaker::default());

    loop {
        let difficulty = loop {
            let answer = prompt("Choose a difficulty (easy/medium/hard): ")?;
            match answer.parse::<Difficulty>() {
                Ok(difficulty) => break difficulty,
                Err(err) => println!("{}", err),
            }
        };

        // the AI opens unless asked otherwise
        let first = if ask_yes_no("Would you like to move first? y/n: ")? {
            Player::Human
        } else {
            Player::Ai
        };

        play(Game::new(difficulty, first), &mut narrator)?;
        narrator.stop();

        if !ask_yes_no("Play again? y/n: ")? {
            break;
        }
    }
    Ok(())
}

fn play(mut game: Game, narrator: &mut Narrator) -> Result<()> {
    println!("Difficulty: {}", game.difficulty());

    // game loop
    loop {
        match game.state() {
            GameState::Playing => match game.turn() {
                Player::Ai => {
                    let spinner = thinking_spinner();
                    let (ai_move, _) = game.play_ai()?;
                    spinner.finish_and_clear();

                    if let Some(ai_move) = ai_move {
                        println!("AI plays {}", ai_move);
                    }
                }
                Player::Human => {
                    let hints = game.hints();
                    display(game.board(), &hints, game.last_move())?;

                    let advice = game.advice();
                    print_advice(&advice)?;
                    narrator.say_if_changed(advice.join(" "));

                    let input = prompt("Move input (x y) > ")?;
                    let next_move = match input.parse::<Move>() {
                        Err(err) => {
                            println!("Invalid move: {}", err);
                            continue;
                        }
                        Ok(next_move) => next_move,
                    };

                    if let Err(err) = game.play_checked(next_move) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                    narrator.stop();
                }
            },

            // end states
            GameState::HumanWin => {
                display(game.board(), &[], game.last_move())?;
                println!("You win!");
                break;
            }
            GameState::AiWin => {
                display(game.board(), &[], game.last_move())?;
                println!("The AI wins!");
                break;
            }
            GameState::Draw => {
                display(game.board(), &[], game.last_move())?;
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
