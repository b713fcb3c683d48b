use std::collections::BTreeSet;

use log::{debug, error, info};
use rocket::{
    http::Status,
    request::{self, FromRequest, Request},
};

use crate::error::{Error, Result};
use crate::model::{
    answer::{AnswerRecord, AnswerRecorder},
    common::{ChoiceId, QuestionId},
    question::QuestionStore,
};

/// Aggregate counts over every recorded answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub total: u64,
    pub correct: u64,
    pub incorrect: u64,
}

impl Score {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        let total = records.len() as u64;
        let correct = records.iter().filter(|r| r.is_correct).count() as u64;
        Self {
            total,
            correct,
            incorrect: total - correct,
        }
    }
}

/// Whether a selection is exactly the correct set. Order and repeated IDs in
/// the selection make no difference.
pub fn selection_matches(selected: &[ChoiceId], correct: &BTreeSet<ChoiceId>) -> bool {
    selected.iter().copied().collect::<BTreeSet<_>>() == *correct
}

/// Grades submissions against the question store and keeps score in the
/// answer recorder.
#[derive(Debug, Clone, Copy)]
pub struct Grader<'a> {
    questions: &'a QuestionStore,
    answers: &'a AnswerRecorder,
}

impl<'a> Grader<'a> {
    pub fn new(questions: &'a QuestionStore, answers: &'a AnswerRecorder) -> Self {
        Self { questions, answers }
    }

    /// Grade a selection for the given question and record the result.
    ///
    /// A question with no correct choice cannot be graded and is reported as
    /// not found, the same as a question that does not exist. Nothing is
    /// recorded in that case.
    pub fn grade(&self, question_id: QuestionId, selected: Vec<ChoiceId>) -> Result<bool> {
        let correct = self.questions.correct_choice_ids(question_id);
        if correct.is_empty() {
            return Err(Error::not_found("Question"));
        }

        let is_correct = selection_matches(&selected, &correct);
        let record = self.answers.append(question_id, selected, is_correct)?;
        debug!(
            "Answer {} to question {question_id} graded as {}",
            record.id,
            if is_correct { "correct" } else { "incorrect" }
        );
        Ok(is_correct)
    }

    /// Count every answer recorded since the last reset.
    pub fn score(&self) -> Result<Score> {
        self.answers.with_records(Score::from_records)
    }

    /// Forget every recorded answer.
    pub fn reset(&self) -> Result<()> {
        let removed = self.answers.clear()?;
        info!("Cleared {removed} recorded answers");
        Ok(())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Grader<'r> {
    type Error = ();

    /// Build a grader from the stores in managed state.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let rocket = req.rocket();
        match (
            rocket.state::<QuestionStore>(),
            rocket.state::<AnswerRecorder>(),
        ) {
            (Some(questions), Some(answers)) => {
                request::Outcome::Success(Grader::new(questions, answers))
            }
            _ => {
                error!("Quiz stores are not in managed state");
                request::Outcome::Failure((Status::InternalServerError, ()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::question::NewQuestion;

    /// Seeded IDs for "What is the capital of France?".
    const PARIS: ChoiceId = 1;
    const LONDON: ChoiceId = 2;

    /// Seeded IDs for "Which planets are in the Solar System?".
    const PLANETS: QuestionId = 4;
    const EARTH: ChoiceId = 13;
    const MARS: ChoiceId = 14;
    const PLUTO: ChoiceId = 15;
    const PROXIMA_CENTAURI: ChoiceId = 16;

    fn stores() -> (QuestionStore, AnswerRecorder) {
        (QuestionStore::seeded().unwrap(), AnswerRecorder::new())
    }

    #[test]
    fn exact_selection_matches() {
        let correct = BTreeSet::from([2, 5, 9]);
        assert!(selection_matches(&[2, 5, 9], &correct));
        assert!(selection_matches(&[9, 2, 5], &correct));
    }

    #[test]
    fn repeated_ids_do_not_change_the_result() {
        let correct = BTreeSet::from([2, 5]);
        assert!(selection_matches(&[5, 2, 5], &correct));
        assert!(!selection_matches(&[2, 2], &correct));
    }

    #[test]
    fn subset_superset_and_disjoint_do_not_match() {
        let correct = BTreeSet::from([2, 5]);
        assert!(!selection_matches(&[2], &correct));
        assert!(!selection_matches(&[2, 5, 7], &correct));
        assert!(!selection_matches(&[1, 3], &correct));
        assert!(!selection_matches(&[], &correct));
    }

    #[test]
    fn capital_of_france() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        let (question, choices) = questions.get_question(1).unwrap();
        assert_eq!(question.text, "What is the capital of France?");
        assert_eq!(choices[0].text, "Paris");
        assert_eq!(choices[1].text, "London");

        assert!(grader.grade(1, vec![PARIS]).unwrap());
        assert!(!grader.grade(1, vec![PARIS, LONDON]).unwrap());
    }

    #[test]
    fn planets_in_the_solar_system() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        let (_, choices) = questions.get_question(PLANETS).unwrap();
        let ids = choices.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![EARTH, MARS, PLUTO, PROXIMA_CENTAURI]);

        assert!(grader.grade(PLANETS, vec![EARTH, MARS, PLUTO]).unwrap());
        assert!(grader.grade(PLANETS, vec![PLUTO, EARTH, MARS]).unwrap());
        assert!(!grader.grade(PLANETS, vec![EARTH, MARS]).unwrap());
        assert!(!grader
            .grade(PLANETS, vec![EARTH, MARS, PLUTO, PROXIMA_CENTAURI])
            .unwrap());
    }

    #[test]
    fn grading_records_the_submission() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        grader.grade(PLANETS, vec![PLUTO, EARTH, MARS, EARTH]).unwrap();

        let records = answers.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question_id, PLANETS);
        assert_eq!(records[0].selected_choice_ids, vec![PLUTO, EARTH, MARS, EARTH]);
        assert!(records[0].is_correct);
    }

    #[test]
    fn same_selection_twice_gives_same_verdict() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        let first = grader.grade(1, vec![LONDON]).unwrap();
        let second = grader.grade(1, vec![LONDON]).unwrap();
        assert_eq!(first, second);

        let records = answers.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
        assert_eq!(records[0].is_correct, records[1].is_correct);
    }

    #[test]
    fn unknown_question_records_nothing() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        assert!(matches!(
            grader.grade(999, vec![PARIS]),
            Err(Error::NotFound(_))
        ));
        assert_eq!(grader.score().unwrap(), Score::default());
    }

    #[test]
    fn question_without_correct_choice_is_not_found() {
        let mut questions = QuestionStore::new();
        let id = questions
            .insert(NewQuestion::new("Trick question").choice("Nope", false))
            .unwrap();
        let answers = AnswerRecorder::new();
        let grader = Grader::new(&questions, &answers);
        assert!(matches!(grader.grade(id, vec![1]), Err(Error::NotFound(_))));
        assert!(answers.records().unwrap().is_empty());
    }

    #[test]
    fn score_counts_every_submission() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        grader.grade(1, vec![PARIS]).unwrap();
        grader.grade(1, vec![LONDON]).unwrap();
        grader.grade(PLANETS, vec![EARTH, MARS, PLUTO]).unwrap();
        grader.grade(PLANETS, vec![EARTH]).unwrap();
        grader.grade(PLANETS, vec![]).unwrap();

        let score = grader.score().unwrap();
        assert_eq!(
            score,
            Score {
                total: 5,
                correct: 2,
                incorrect: 3
            }
        );
    }

    #[test]
    fn reset_clears_the_score() {
        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);
        grader.grade(1, vec![PARIS]).unwrap();
        grader.reset().unwrap();
        assert_eq!(grader.score().unwrap(), Score::default());

        // Resetting an empty log still succeeds.
        grader.reset().unwrap();
        assert_eq!(grader.score().unwrap(), Score::default());
    }

    #[test]
    fn concurrent_grading_and_scoring() {
        const WRITERS: usize = 4;
        const SUBMISSIONS_PER_WRITER: usize = 200;

        let (questions, answers) = stores();
        let grader = Grader::new(&questions, &answers);

        let observed = std::thread::scope(|scope| {
            for writer in 0..WRITERS {
                scope.spawn(move || {
                    for i in 0..SUBMISSIONS_PER_WRITER {
                        // Alternate correct and incorrect answers.
                        let selected = if (writer + i) % 2 == 0 {
                            vec![PARIS]
                        } else {
                            vec![LONDON]
                        };
                        grader.grade(1, selected).unwrap();
                    }
                });
            }

            let readers = (0..2)
                .map(|_| {
                    scope.spawn(move || {
                        (0..SUBMISSIONS_PER_WRITER)
                            .map(|_| grader.score().unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();
            readers
                .into_iter()
                .flat_map(|reader| reader.join().unwrap())
                .collect::<Vec<_>>()
        });

        for score in observed {
            assert_eq!(score.correct + score.incorrect, score.total);
            assert!(score.total <= (WRITERS * SUBMISSIONS_PER_WRITER) as u64);
        }

        let total = WRITERS * SUBMISSIONS_PER_WRITER;
        assert_eq!(
            grader.score().unwrap(),
            Score {
                total: total as u64,
                correct: (total / 2) as u64,
                incorrect: (total / 2) as u64,
            }
        );

        let ids = answers
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), total);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&(total as u32)));
    }
}
