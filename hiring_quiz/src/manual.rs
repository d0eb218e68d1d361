/*!

This is the long-form manual for `hiring_quiz` and `hirequiz`.

## The quiz

Each session draws up to 30 candidates from the recruiting sheet. For every candidate,
the user is asked up to three questions, always in this order:

1. `matching`: was the candidate matched with a company?
2. `document_passed`: did the candidate pass document screening?
3. `offer_accepted`: did the candidate accept the offer?

When the true answer to a question is YES, the quiz moves to the next question for the
same candidate (or to the next candidate after the third question). When the true answer
is NO, the candidate is done and the quiz moves to the next candidate. In both cases the
answer of the user is scored, but it does not change the path through the questions.

Candidates with no data to show (all their visible columns are empty) are skipped
without a question.

A value made only of spaces counts as empty. A number, even `0`, counts as data.

## Input format

The input is an Excel (.xlsx) workbook. By default, `hirequiz` looks for `data.xlsx`
then `data.xlsx.xlsx` in the current directory.

|  name | age | career_summary | target_employer | matching | document_passed | offer_accepted |
|-------|-----|----------------|-----------------|----------|-----------------|----------------|
|  ...  | 34  | Sales, 8 years | ACME            | TRUE     | TRUE            | FALSE          |

- the first row is the header. Surrounding whitespace in the names is ignored.
- only the first 363 rows of data are read.
- the three outcome columns are mandatory. Boolean cells, numbers and the texts
  `True`/`False` are accepted. Anything that is not true counts as false.
  The labels `マッチング`, `書類通過` and `承諾` are accepted as well.
- `target_employer` (or `入社企業`) is never displayed.
- `career_summary` (or `キャリアサマリ`) is copied into the results.
- date cells are displayed as `YYYY/MM/DD`.

## Commands

At each question, type `yes` (or `y`) or `no` (or `n`). After an answer, type `next` to
move on. `quit` stops the session without exporting.

## Results

At the end of the quiz, the counts of correct and incorrect answers and the accuracy
are displayed, and the detailed answers are written to `quiz_results.xlsx` with the
columns `candidate`, `stage`, `answer`, `career_summary`, `verdict`.

Note: the `stage` column contains the stage the session moved to after the answer, not
the stage that was asked. For example, a correct YES to the `matching` question is
recorded under `document_passed`. The JSON summary (`--summary`) contains both values.

## Configuration

All the options can be given in a JSON file passed with `--config`. Command line flags
take precedence over the file.

```json
{
  "dataFiles": ["data.xlsx", "data.xlsx.xlsx"],
  "excelWorksheetName": "Sheet1",
  "rowLimit": 363,
  "sampleSize": 30,
  "randomSeed": 12,
  "excludedFields": ["target_employer", "入社企業"],
  "summaryFields": ["career_summary", "キャリアサマリ"],
  "outputFile": "quiz_results.xlsx",
  "summaryFile": "quiz_summary.json",
  "logoPath": "logo.png"
}
```

Without `randomSeed`, every session draws a different sample.

 */
