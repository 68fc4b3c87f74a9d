/*!

This is the long-form manual for `prize_draw` and `prizedraw`.

## How a draw works

All the participants are shuffled once (Fisher–Yates), then every prize, in
the order in which it was declared, takes the next `count` names of the
shuffled list. Hence:
- nobody wins twice: the slices never overlap
- every prize gets exactly the number of winners it asked for
- the draw fails if the prizes ask for more winners than there are participants

The same name may appear several times in the input (two people with the
same name, or one person with several tickets). Each occurrence is a separate
entry and may win separately.

When a seed is given (`--seed` or `randomSeed`), the draw is reproducible: the
same input file, the same prizes and the same seed always produce the same
winners. Without a seed, the generator is seeded by the operating system.

## Input formats

The following formats are supported:
* `xlsx` Excel workbook
* `csv` Comma Separated Values

In both cases, the first row is the header and contains the names of the columns.
Blank header cells are ignored. Rows in which every cell is blank are skipped.
All the values are trimmed.

### `xlsx`

The first worksheet is used, unless a worksheet name is provided with
`--excel-worksheet-name` or `excelWorksheetName`. Numbers are turned into text,
so that a column of employee numbers can be used as the list of participants.

### `csv`

```text
Name,Department
Anna,Sales
Bob,IT
```

## Selecting the column

The column is selected by the name in the header (`--column Name`). If the file
has a single column, it is selected automatically. Use `--preview` to print the
names of the columns and the first values of the selected column.

## Configuration

```json
{
  "outputSettings": { "activityName": "Year-end party", "outputDirectory": "results" },
  "participantSources": [
    { "provider": "xlsx", "filePath": "staff.xlsx", "column": "Name" }
  ],
  "prizes": [
    { "name": "Grand prize", "count": 1 },
    { "name": "Second prize", "count": "3" }
  ],
  "rules": { "randomSeed": "42" }
}
```

Notes:
- `filePath` is relative to the directory of the configuration file.
- `count` is a number or a string containing a number.
- several sources may be given: their participants are put together, in order.
- when `outputDirectory` is set, the winners are also exported to the workbook
  `<activityName>_results_<YYYY-MM-DD>.xlsx` in this directory.
- in the spreadsheets, numbers are read as text (`1042`, not `1042.0`), dates
  as their serial number and error cells such as `#N/A` as blanks.

## Output

The summary of the draw is written in JSON with `--out`:

```json
{
  "config": { "activity": "Year-end party", "participants": 120, "totalWinners": 4, "seed": "42" },
  "results": [
    { "prize": "Grand prize", "count": 1, "winners": ["Anna"] },
    { "prize": "Second prize", "count": 3, "winners": ["Bob", "Clara", "Dan"] }
  ]
}
```

With `--reference`, the summary is compared to a previously saved summary. This
is useful to check a published seeded draw.

The export (`--export`) has one line per winner. It is a workbook when the
file name ends with `.xlsx`, and a CSV file otherwise:

```text
activity,prize,position,winner
Year-end party,Grand prize,1,Anna
```

 */
