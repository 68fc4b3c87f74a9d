/*!

# Quick start

Export the list of participants from your spreadsheet tool in the **Excel format** (xlsx).
The first row should contain the names of the columns, for example:

| Name  | Department |
|-------|------------|
| Anna  | Sales      |
| Bob   | IT         |
| Clara | IT         |

Check that the right column is picked up:

```bash
prizedraw -i staff.xlsx --column Name --preview
```

Then run the draw, giving each prize with its number of winners. Prizes are
drawn and announced in the order of the `--prize` flags:

```bash
prizedraw -i staff.xlsx --column Name \
--prize "Grand prize=1" \
--prize "Second prize=2" \
--animate
```

```text
Grand prize (1)
  1. Clara
Second prize (2)
  1. Anna
  2. Bob
All prizes have been drawn.
```

**Keeping a record** Pass `--out results.json` to save a summary of the draw and
`--export winners.csv` for a list of the winners that opens in any spreadsheet.
Pass `--seed` with a number announced in advance to make the draw reproducible.

For repeated events, all these options can be stored in a configuration file, see the
[configuration section](../manual/index.html#configuration).

*/
