// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::archive::SavedBooking;
use crate::command::Command;
use crate::error::{CoreError, Guard};
use crate::state::{BookingSnapshot, BookingState, Outcome, Step, TransitionResult};
use luxestay_domain::{DaySelection, SelectionField, generate_day_plan, is_day_plan_current};

/// Applies a command to the current state, producing the next state.
///
/// The input state is never modified. On error the caller keeps its
/// current state, so a rejected command has no effect.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what the
///   transition produced
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - A step guard is unmet (`CoreError::ValidationBlocked`)
/// - A booking is saved under a blank name (`CoreError::EmptyName`)
/// - A saved booking id does not exist on load (`CoreError::NotFound`)
/// - The day plan cannot be derived (`CoreError::DomainViolation`)
pub fn apply(state: &BookingState, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();

    match command {
        Command::SetField(field) => {
            let mut new_state: BookingState = state.clone();
            new_state.configuration.set_field(field);
            Ok(updated(new_state))
        }
        Command::AdvanceToStep2 => advance_to_step2(state, command_name),
        Command::UpdateDaySelection {
            index,
            field,
            value,
        } => Ok(update_day_selection(state, index, field, value)),
        Command::AdvanceToStep3 => {
            require_step(state, Step::DailyConfiguration, command_name)?;
            require_current_plan(state, command_name)?;
            if !state.is_step2_valid() {
                return Err(blocked(command_name, Guard::Step2Incomplete));
            }

            let mut new_state: BookingState = state.clone();
            new_state.current_step = Step::Summary;
            Ok(updated(new_state))
        }
        Command::GoBack => {
            let previous: Step = state
                .current_step
                .previous()
                .ok_or_else(|| blocked(command_name, Guard::AtFirstStep))?;

            // Configuration and selections survive back navigation
            let mut new_state: BookingState = state.clone();
            new_state.current_step = previous;
            Ok(updated(new_state))
        }
        Command::ResetBooking => {
            let new_state: BookingState = BookingState {
                is_loading: state.is_loading,
                ..BookingState::with_archive(state.archive.clone())
            };
            Ok(updated(new_state))
        }
        Command::Confirm => {
            require_step(state, Step::Summary, command_name)?;
            require_current_plan(state, command_name)?;
            Ok(TransitionResult {
                new_state: state.clone(),
                outcome: Outcome::Confirmed(state.configuration.clone()),
            })
        }
        Command::SetLoading(is_loading) => {
            let mut new_state: BookingState = state.clone();
            new_state.is_loading = is_loading;
            Ok(updated(new_state))
        }
        Command::SaveBooking { name } => {
            let mut new_state: BookingState = state.clone();
            let saved: SavedBooking = new_state.archive.save(&name, state.snapshot())?;
            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Saved(saved),
            })
        }
        Command::LoadBooking { id } => {
            let snapshot: BookingSnapshot = state.archive.load(&id)?;

            let mut new_state: BookingState = state.clone();
            new_state.current_step = snapshot.current_step;
            new_state.configuration = snapshot.configuration;
            new_state.is_loading = false;

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Loaded { id },
            })
        }
        Command::DeleteSavedBooking { id } => {
            let mut new_state: BookingState = state.clone();
            if !new_state.archive.delete(&id) {
                return Ok(unchanged(state));
            }
            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Deleted { id },
            })
        }
    }
}

/// Generates a fresh day plan and moves to daily configuration.
///
/// Any previous plan is discarded, so changing the start date or day count
/// after going back invalidates earlier per-day choices.
fn advance_to_step2(
    state: &BookingState,
    command_name: &'static str,
) -> Result<TransitionResult, CoreError> {
    require_step(state, Step::InitialConfiguration, command_name)?;
    if !state.is_step1_valid() {
        return Err(blocked(command_name, Guard::Step1Incomplete));
    }

    let (Some(start_date), Some(number_of_days)) = (
        state.configuration.start_date,
        state.configuration.number_of_days,
    ) else {
        return Err(blocked(command_name, Guard::Step1Incomplete));
    };

    let mut new_state: BookingState = state.clone();
    new_state.is_loading = true;

    let plan: Vec<DaySelection> = generate_day_plan(start_date, number_of_days)?;

    new_state.configuration.daily_selections = plan;
    new_state.current_step = Step::DailyConfiguration;
    new_state.is_loading = false;

    Ok(updated(new_state))
}

/// Replaces one field on one day. An index past the end of the plan is
/// accepted and changes nothing.
fn update_day_selection(
    state: &BookingState,
    index: usize,
    field: SelectionField,
    value: Option<String>,
) -> TransitionResult {
    if index >= state.configuration.daily_selections.len() {
        return unchanged(state);
    }

    let mut new_state: BookingState = state.clone();
    if let Some(day) = new_state.configuration.daily_selections.get_mut(index) {
        day.set(field, value);
    }
    updated(new_state)
}

fn require_step(
    state: &BookingState,
    expected: Step,
    command_name: &'static str,
) -> Result<(), CoreError> {
    if state.current_step != expected {
        return Err(blocked(
            command_name,
            Guard::WrongStep {
                expected,
                actual: state.current_step,
            },
        ));
    }
    Ok(())
}

fn require_current_plan(
    state: &BookingState,
    command_name: &'static str,
) -> Result<(), CoreError> {
    if !is_day_plan_current(&state.configuration) {
        return Err(blocked(command_name, Guard::PlanOutdated));
    }
    Ok(())
}

const fn blocked(command: &'static str, guard: Guard) -> CoreError {
    CoreError::ValidationBlocked { command, guard }
}

const fn updated(new_state: BookingState) -> TransitionResult {
    TransitionResult {
        new_state,
        outcome: Outcome::Updated,
    }
}

fn unchanged(state: &BookingState) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: Outcome::Unchanged,
    }
}
